use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::ExperienceCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error("Experience slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, command: ExperienceCommand)
        -> Result<Experience, CreateExperienceError>;
}
