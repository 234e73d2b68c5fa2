// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest first by `published_at`.
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ProjectQueryError>;
}
