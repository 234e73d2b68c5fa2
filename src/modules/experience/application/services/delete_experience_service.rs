use async_trait::async_trait;

use crate::modules::experience::application::ports::incoming::use_cases::{
    DeleteExperienceError, DeleteExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteExperienceError> {
        self.repository.delete_experience(slug).await?;
        Ok(())
    }
}
