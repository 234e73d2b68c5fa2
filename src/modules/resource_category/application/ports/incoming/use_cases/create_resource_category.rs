use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::ResourceCategoryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateResourceCategoryError {
    #[error("Resource category slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateResourceCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, CreateResourceCategoryError>;
}
