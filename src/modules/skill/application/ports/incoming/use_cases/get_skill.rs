use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Skill, GetSkillError>;
}
