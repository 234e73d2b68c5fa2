use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::SocialLink;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSocialLinksError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSocialLinksUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SocialLink>, GetSocialLinksError>;
}
