use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceData {
    pub title: String,
    pub slug: String,
    pub company: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Experience slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn update_experience(
        &self,
        slug: &str,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete_experience(&self, slug: &str) -> Result<(), ExperienceRepositoryError>;

    /// Rewrites only the slug column; used by the backfill command.
    async fn update_slug(&self, id: Uuid, slug: &str) -> Result<(), ExperienceRepositoryError>;
}
