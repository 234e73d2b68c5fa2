use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetUserDetailError, GetUserDetailUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetUserDetailService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetUserDetailService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserDetailUseCase for GetUserDetailService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Option<UserDetail>, GetUserDetailError> {
        self.query
            .find_user_detail()
            .await
            .map_err(|e| GetUserDetailError::QueryError(e.to_string()))
    }
}
