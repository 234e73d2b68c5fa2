use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCategory>, GetSkillCategoriesError>;
}
