use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError>;
}
