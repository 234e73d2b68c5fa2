use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::ResourceCategoryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateResourceCategoryError {
    #[error("Resource category not found")]
    CategoryNotFound,

    #[error("Resource category slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateResourceCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        slug: &str,
        command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, UpdateResourceCategoryError>;
}
