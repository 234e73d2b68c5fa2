use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::BackfillReport;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BackfillExperienceSlugsError {
    #[error("No free slug for base '{0}'")]
    SlugSpaceExhausted(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Recomputes every experience slug from its title and company, adding
/// `-1`, `-2`, ... when another experience already holds the base slug.
#[async_trait]
pub trait BackfillExperienceSlugsUseCase: Send + Sync {
    async fn execute(&self) -> Result<BackfillReport, BackfillExperienceSlugsError>;
}
