use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::ProjectCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Project slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    /// `slug` addresses the stored project; the new slug comes from the command.
    async fn execute(
        &self,
        slug: &str,
        command: ProjectCommand,
    ) -> Result<Project, UpdateProjectError>;
}
