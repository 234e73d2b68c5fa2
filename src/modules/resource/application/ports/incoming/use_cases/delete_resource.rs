use async_trait::async_trait;

use crate::modules::resource::application::ports::outgoing::ResourceRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteResourceError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResourceRepositoryError> for DeleteResourceError {
    fn from(err: ResourceRepositoryError) -> Self {
        match err {
            ResourceRepositoryError::NotFound => DeleteResourceError::ResourceNotFound,
            other => DeleteResourceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteResourceUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<(), DeleteResourceError>;
}
