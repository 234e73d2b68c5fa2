use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::SocialLink;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetSocialLinksError, GetSocialLinksUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct GetSocialLinksService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetSocialLinksService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSocialLinksUseCase for GetSocialLinksService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SocialLink>, GetSocialLinksError> {
        self.query
            .list_social_links()
            .await
            .map_err(|e| GetSocialLinksError::QueryError(e.to_string()))
    }
}
