use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for DeleteSkillError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => DeleteSkillError::SkillNotFound,
            other => DeleteSkillError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<(), DeleteSkillError>;
}
