use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    ResourceCategoryCommand, UpdateResourceCategoryError, UpdateResourceCategoryUseCase,
};
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryQuery, ResourceCategoryRepository, ResourceCategoryRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateResourceCategoryUseCase for UpdateResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery + Send + Sync,
    R: ResourceCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, UpdateResourceCategoryError> {
        let slug = normalize_path_slug(slug);

        if command.slug() != slug.as_str() {
            let taken = self
                .query
                .slug_exists(command.slug())
                .await
                .map_err(|e| UpdateResourceCategoryError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateResourceCategoryError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_category(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                ResourceCategoryRepositoryError::NotFound => {
                    UpdateResourceCategoryError::CategoryNotFound
                }
                ResourceCategoryRepositoryError::SlugAlreadyExists => {
                    UpdateResourceCategoryError::SlugAlreadyExists
                }
                other => UpdateResourceCategoryError::RepositoryError(other.to_string()),
            })
    }
}
