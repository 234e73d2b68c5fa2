use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceQueryError {
    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ResourceQuery: Send + Sync {
    /// Newest first, each with its category embedded.
    async fn list(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ResourceQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Resource, ResourceQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceQueryError>;

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, ResourceQueryError>;
}
