use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillCategoryError {
    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<SkillCategory, GetSkillCategoryError>;
}
