use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

pub struct GetExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperienceUseCase for GetExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Experience, GetExperienceError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            ExperienceQueryError::NotFound => GetExperienceError::ExperienceNotFound,
            other => GetExperienceError::QueryError(other.to_string()),
        })
    }
}
