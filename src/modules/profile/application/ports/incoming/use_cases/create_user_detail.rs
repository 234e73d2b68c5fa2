use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::UserDetailCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserDetailError {
    #[error("User detail already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the profile. Refuses when one is already stored.
#[async_trait]
pub trait CreateUserDetailUseCase: Send + Sync {
    async fn execute(&self, command: UserDetailCommand)
        -> Result<UserDetail, CreateUserDetailError>;
}
