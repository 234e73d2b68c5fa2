use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::UserDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserDetailError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserDetailUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<UserDetail>, GetUserDetailError>;
}
