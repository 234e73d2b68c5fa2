use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;

pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetExperiencesError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
    use crate::modules::experience::application::services::mocks::MockExperienceQuery;
    use crate::tests::support::fixtures::sample_experience;

    #[tokio::test]
    async fn test_list_experiences() {
        let query = MockExperienceQuery::with_experiences(vec![sample_experience()]);
        let service = GetExperiencesService::new(query);

        assert_eq!(service.execute().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_experiences_failure() {
        let query =
            MockExperienceQuery::failing(ExperienceQueryError::DatabaseError("down".into()));
        let service = GetExperiencesService::new(query);

        assert!(matches!(
            service.execute().await.unwrap_err(),
            GetExperiencesError::QueryError(_)
        ));
    }
}
