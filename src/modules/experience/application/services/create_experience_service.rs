use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, ExperienceCommand,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository, ExperienceRepositoryError,
};

pub struct CreateExperienceService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateExperienceService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateExperienceUseCase for CreateExperienceService<Q, R>
where
    Q: ExperienceQuery + Send + Sync,
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ExperienceCommand,
    ) -> Result<Experience, CreateExperienceError> {
        let owner = self
            .query
            .find_slug_owner(command.slug())
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))?;

        if owner.is_some() {
            return Err(CreateExperienceError::SlugAlreadyExists);
        }

        self.repository
            .create_experience(command.into_data())
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::SlugAlreadyExists => {
                    CreateExperienceError::SlugAlreadyExists
                }
                other => CreateExperienceError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
    use crate::modules::experience::application::services::mocks::{
        MockExperienceQuery, MockExperienceRepository,
    };
    use crate::tests::support::fixtures::{experience_command, sample_experience};

    #[tokio::test]
    async fn test_create_experience_success() {
        // Arrange
        let service = CreateExperienceService::new(
            MockExperienceQuery::default(),
            MockExperienceRepository::default(),
        );

        // Act
        let res = service
            .execute(experience_command("Backend Engineer", "Acme Corp"))
            .await;

        // Assert
        assert_eq!(res.unwrap().slug, "backend-engineer-acme-corp");
    }

    #[tokio::test]
    async fn test_create_experience_duplicate_title_and_company() {
        let query = MockExperienceQuery::with_experiences(vec![sample_experience()]);
        let service = CreateExperienceService::new(query, MockExperienceRepository::default());

        let res = service
            .execute(experience_command("Backend Engineer", "Acme Corp"))
            .await;

        assert!(matches!(
            res.unwrap_err(),
            CreateExperienceError::SlugAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_create_experience_query_failure() {
        let query = MockExperienceQuery::failing(ExperienceQueryError::DatabaseError(
            "down".to_string(),
        ));
        let service = CreateExperienceService::new(query, MockExperienceRepository::default());

        let res = service
            .execute(experience_command("Backend Engineer", "Acme Corp"))
            .await;

        assert!(matches!(
            res.unwrap_err(),
            CreateExperienceError::RepositoryError(_)
        ));
    }

    #[tokio::test]
    async fn test_create_experience_unique_violation_race() {
        let repo = MockExperienceRepository::failing(ExperienceRepositoryError::SlugAlreadyExists);
        let service = CreateExperienceService::new(MockExperienceQuery::default(), repo);

        let res = service
            .execute(experience_command("Backend Engineer", "Acme Corp"))
            .await;

        assert!(matches!(
            res.unwrap_err(),
            CreateExperienceError::SlugAlreadyExists
        ));
    }
}
