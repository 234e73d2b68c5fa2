use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, ProjectCommand,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateProjectUseCase for CreateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: ProjectCommand) -> Result<Project, CreateProjectError> {
        let taken = self
            .query
            .slug_exists(command.slug())
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(CreateProjectError::SlugAlreadyExists);
        }

        // The unique index still catches a concurrent insert of the same slug
        self.repository
            .create_project(command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                other => CreateProjectError::RepositoryError(other.to_string()),
            })
    }
}
