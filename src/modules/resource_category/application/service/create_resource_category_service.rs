use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    CreateResourceCategoryError, CreateResourceCategoryUseCase, ResourceCategoryCommand,
};
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryQuery, ResourceCategoryRepository, ResourceCategoryRepositoryError,
};

pub struct CreateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateResourceCategoryUseCase for CreateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery + Send + Sync,
    R: ResourceCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, CreateResourceCategoryError> {
        let taken = self
            .query
            .slug_exists(command.slug())
            .await
            .map_err(|e| CreateResourceCategoryError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(CreateResourceCategoryError::SlugAlreadyExists);
        }

        self.repository
            .create_category(command.into_data())
            .await
            .map_err(|e| match e {
                ResourceCategoryRepositoryError::SlugAlreadyExists => {
                    CreateResourceCategoryError::SlugAlreadyExists
                }
                other => CreateResourceCategoryError::RepositoryError(other.to_string()),
            })
    }
}
