use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateProjectUseCase for UpdateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: ProjectCommand,
    ) -> Result<Project, UpdateProjectError> {
        let slug = normalize_path_slug(slug);

        // A title change moves the project to a new slug; that slug must be free
        if command.slug() != slug.as_str() {
            let taken = self
                .query
                .slug_exists(command.slug())
                .await
                .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateProjectError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_project(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::ProjectNotFound,
                ProjectRepositoryError::SlugAlreadyExists => UpdateProjectError::SlugAlreadyExists,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
