use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::UserDetailCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserDetailError {
    #[error("User detail not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserDetailUseCase: Send + Sync {
    async fn execute(&self, command: UserDetailCommand)
        -> Result<UserDetail, UpdateUserDetailError>;
}
