use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteResourceCategoryError {
    #[error("Resource category not found")]
    CategoryNotFound,

    #[error("Resource category still has resources")]
    CategoryHasResources,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Refuses to delete a category that resources still reference.
#[async_trait]
pub trait DeleteResourceCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<(), DeleteResourceCategoryError>;
}
