use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateUserDetailError, CreateUserDetailUseCase, UserDetailCommand,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};

pub struct CreateUserDetailService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateUserDetailService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateUserDetailUseCase for CreateUserDetailService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UserDetailCommand,
    ) -> Result<UserDetail, CreateUserDetailError> {
        let existing = self
            .query
            .find_user_detail()
            .await
            .map_err(|e| CreateUserDetailError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(CreateUserDetailError::AlreadyExists);
        }

        self.repository
            .create_user_detail(command.into_data())
            .await
            .map_err(|e| CreateUserDetailError::RepositoryError(e.to_string()))
    }
}
