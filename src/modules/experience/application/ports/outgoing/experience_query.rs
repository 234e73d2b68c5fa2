use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Most recent `start_date` first.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Experience, ExperienceQueryError>;

    /// Id of the experience currently holding `slug`, if any.
    async fn find_slug_owner(&self, slug: &str) -> Result<Option<Uuid>, ExperienceQueryError>;
}
