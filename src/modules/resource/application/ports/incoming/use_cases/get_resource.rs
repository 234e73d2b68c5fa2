use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::Resource;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResourceError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetResourceUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Resource, GetResourceError>;
}
