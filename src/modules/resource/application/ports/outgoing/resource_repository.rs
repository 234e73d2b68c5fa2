use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::resource::application::domain::entities::{Resource, ResourceType};

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub link: Option<String>,
    pub kind: ResourceType,
    pub category_id: Uuid,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub read_time_minutes: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResourceRepositoryError {
    #[error("Resource not found")]
    NotFound,

    #[error("Resource slug already exists")]
    SlugAlreadyExists,

    #[error("Resource category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Writes return the stored resource with its category embedded.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create_resource(&self, data: ResourceData) -> Result<Resource, ResourceRepositoryError>;

    async fn update_resource(
        &self,
        slug: &str,
        data: ResourceData,
    ) -> Result<Resource, ResourceRepositoryError>;

    async fn delete_resource(&self, slug: &str) -> Result<(), ResourceRepositoryError>;
}
