use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::SkillCategoryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillCategoryError {
    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Skill category slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        slug: &str,
        command: SkillCategoryCommand,
    ) -> Result<SkillCategory, UpdateSkillCategoryError>;
}
