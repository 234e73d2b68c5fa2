use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteProjectError> {
        self.repository.delete_project(slug).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;
    use crate::modules::project::application::service::mocks::MockProjectRepository;

    #[tokio::test]
    async fn test_delete_success() {
        let service = DeleteProjectService::new(MockProjectRepository::default());

        assert!(service.execute("portfolio-cms").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_project() {
        let service =
            DeleteProjectService::new(MockProjectRepository::failing(ProjectRepositoryError::NotFound));

        let res = service.execute("missing").await;

        assert!(matches!(
            res.unwrap_err(),
            DeleteProjectError::ProjectNotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_database_error() {
        let service = DeleteProjectService::new(MockProjectRepository::failing(
            ProjectRepositoryError::DatabaseError("timeout".into()),
        ));

        let res = service.execute("portfolio-cms").await;

        assert!(matches!(
            res.unwrap_err(),
            DeleteProjectError::RepositoryError(msg) if msg.contains("timeout")
        ));
    }
}
