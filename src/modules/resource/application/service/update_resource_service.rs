use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    ResourceCommand, UpdateResourceError, UpdateResourceUseCase,
};
use crate::modules::resource::application::ports::outgoing::{
    ResourceQuery, ResourceRepository, ResourceRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateResourceService<Q, R>
where
    Q: ResourceQuery,
    R: ResourceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateResourceService<Q, R>
where
    Q: ResourceQuery,
    R: ResourceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateResourceUseCase for UpdateResourceService<Q, R>
where
    Q: ResourceQuery + Send + Sync,
    R: ResourceRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: ResourceCommand,
    ) -> Result<Resource, UpdateResourceError> {
        let category_known = self
            .query
            .category_exists(command.category_id())
            .await
            .map_err(|e| UpdateResourceError::RepositoryError(e.to_string()))?;

        if !category_known {
            return Err(UpdateResourceError::CategoryNotFound);
        }

        let slug = normalize_path_slug(slug);

        if command.slug() != slug.as_str() {
            let taken = self
                .query
                .slug_exists(command.slug())
                .await
                .map_err(|e| UpdateResourceError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateResourceError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_resource(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                ResourceRepositoryError::NotFound => UpdateResourceError::ResourceNotFound,
                ResourceRepositoryError::SlugAlreadyExists => {
                    UpdateResourceError::SlugAlreadyExists
                }
                ResourceRepositoryError::CategoryNotFound => UpdateResourceError::CategoryNotFound,
                other => UpdateResourceError::RepositoryError(other.to_string()),
            })
    }
}
