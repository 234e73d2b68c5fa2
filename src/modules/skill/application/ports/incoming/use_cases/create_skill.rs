use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::SkillCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Skill slug already exists")]
    SlugAlreadyExists,

    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: SkillCommand) -> Result<Skill, CreateSkillError>;
}
