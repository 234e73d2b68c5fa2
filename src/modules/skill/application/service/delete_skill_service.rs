use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteSkillError> {
        self.repository.delete_skill(slug).await?;
        Ok(())
    }
}
