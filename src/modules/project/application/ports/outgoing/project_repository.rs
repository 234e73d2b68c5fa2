// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated project fields, written as a whole on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub title: String,

    /// Derived from the title, never supplied by clients
    pub slug: String,

    pub description: String,
    pub content: String,
    pub cover_image: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: String,

    /// Stored as JSONB in DB (array of strings)
    pub technologies: Vec<String>,

    pub published_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Project slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Write-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError>;

    /// Replaces every field of the project currently stored under `slug`.
    async fn update_project(
        &self,
        slug: &str,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, slug: &str) -> Result<(), ProjectRepositoryError>;
}
