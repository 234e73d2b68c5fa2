use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResourceCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetResourceCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ResourceCategory>, GetResourceCategoriesError>;
}
