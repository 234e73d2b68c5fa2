use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::AboutParagraph;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutParagraphsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAboutParagraphsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AboutParagraph>, GetAboutParagraphsError>;
}
