use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResourceCategoryError {
    #[error("Resource category not found")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetResourceCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ResourceCategory, GetResourceCategoryError>;
}
