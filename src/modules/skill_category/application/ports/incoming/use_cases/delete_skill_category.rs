use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillCategoryError {
    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Skill category still has skills")]
    CategoryHasSkills,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<(), DeleteSkillCategoryError>;
}
