use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperienceError {
    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Experience, GetExperienceError>;
}
