use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::SkillCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Skill slug already exists")]
    SlugAlreadyExists,

    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Replaces the skill at `slug`; an omitted order keeps the stored one.
#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, slug: &str, command: SkillCommand) -> Result<Skill, UpdateSkillError>;
}
