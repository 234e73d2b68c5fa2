use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceCategoryQueryError {
    #[error("Resource category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResourceCategoryQuery: Send + Sync {
    /// Ordered by `order`, then name.
    async fn list(&self) -> Result<Vec<ResourceCategory>, ResourceCategoryQueryError>;

    async fn get_by_slug(&self, slug: &str)
        -> Result<ResourceCategory, ResourceCategoryQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceCategoryQueryError>;

    /// Whether at least one resource points at the category.
    async fn has_resources(&self, category_id: Uuid) -> Result<bool, ResourceCategoryQueryError>;
}
