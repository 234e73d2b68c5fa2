use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateUserDetailError, UpdateUserDetailUseCase, UserDetailCommand,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

pub struct UpdateUserDetailService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateUserDetailService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateUserDetailUseCase for UpdateUserDetailService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UserDetailCommand,
    ) -> Result<UserDetail, UpdateUserDetailError> {
        let existing = self
            .query
            .find_user_detail()
            .await
            .map_err(|e| UpdateUserDetailError::RepositoryError(e.to_string()))?
            .ok_or(UpdateUserDetailError::NotFound)?;

        self.repository
            .update_user_detail(existing.id, command.into_data())
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateUserDetailError::NotFound,
                other => UpdateUserDetailError::RepositoryError(other.to_string()),
            })
    }
}
