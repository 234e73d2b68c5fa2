use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResourcesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetResourcesUseCase: Send + Sync {
    async fn execute(&self, filter: ResourceFilter) -> Result<Vec<Resource>, GetResourcesError>;
}
