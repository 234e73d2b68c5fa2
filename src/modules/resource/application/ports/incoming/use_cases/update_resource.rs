use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::ResourceCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateResourceError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Resource slug already exists")]
    SlugAlreadyExists,

    #[error("Resource category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateResourceUseCase: Send + Sync {
    async fn execute(
        &self,
        slug: &str,
        command: ResourceCommand,
    ) -> Result<Resource, UpdateResourceError>;
}
