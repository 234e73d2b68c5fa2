use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;

/// Column values for a write. `order: None` keeps the stored value on
/// update and means `0` on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCategoryData {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceCategoryRepositoryError {
    #[error("Resource category not found")]
    NotFound,

    #[error("Resource category slug already exists")]
    SlugAlreadyExists,

    #[error("Resource category is still referenced by resources")]
    InUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResourceCategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError>;

    async fn update_category(
        &self,
        slug: &str,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError>;

    async fn delete_category(&self, slug: &str) -> Result<(), ResourceCategoryRepositoryError>;
}
