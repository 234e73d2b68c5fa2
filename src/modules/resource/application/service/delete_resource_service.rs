use async_trait::async_trait;

use crate::modules::resource::application::ports::incoming::use_cases::{
    DeleteResourceError, DeleteResourceUseCase,
};
use crate::modules::resource::application::ports::outgoing::ResourceRepository;

pub struct DeleteResourceService<R>
where
    R: ResourceRepository,
{
    repository: R,
}

impl<R> DeleteResourceService<R>
where
    R: ResourceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteResourceUseCase for DeleteResourceService<R>
where
    R: ResourceRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteResourceError> {
        self.repository.delete_resource(slug).await?;
        Ok(())
    }
}
