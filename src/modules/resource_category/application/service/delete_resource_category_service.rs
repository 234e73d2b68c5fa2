use async_trait::async_trait;

use crate::modules::resource_category::application::ports::incoming::use_cases::{
    DeleteResourceCategoryError, DeleteResourceCategoryUseCase,
};
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryQuery, ResourceCategoryQueryError, ResourceCategoryRepository,
    ResourceCategoryRepositoryError,
};

pub struct DeleteResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery,
    R: ResourceCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteResourceCategoryUseCase for DeleteResourceCategoryService<Q, R>
where
    Q: ResourceCategoryQuery + Send + Sync,
    R: ResourceCategoryRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteResourceCategoryError> {
        let category = self.query.get_by_slug(slug).await.map_err(|e| match e {
            ResourceCategoryQueryError::NotFound => DeleteResourceCategoryError::CategoryNotFound,
            other => DeleteResourceCategoryError::RepositoryError(other.to_string()),
        })?;

        let in_use = self
            .query
            .has_resources(category.id)
            .await
            .map_err(|e| DeleteResourceCategoryError::RepositoryError(e.to_string()))?;

        if in_use {
            return Err(DeleteResourceCategoryError::CategoryHasResources);
        }

        // The FK still guards against a resource added since the check.
        self.repository
            .delete_category(slug)
            .await
            .map_err(|e| match e {
                ResourceCategoryRepositoryError::NotFound => {
                    DeleteResourceCategoryError::CategoryNotFound
                }
                ResourceCategoryRepositoryError::InUse => {
                    DeleteResourceCategoryError::CategoryHasResources
                }
                other => DeleteResourceCategoryError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resource_category::application::service::mocks::{
        MockResourceCategoryQuery, MockResourceCategoryRepository,
    };
    use crate::tests::support::fixtures::sample_resource_category;

    #[tokio::test]
    async fn test_delete_unused_category() {
        let service = DeleteResourceCategoryService::new(
            MockResourceCategoryQuery::with(vec![sample_resource_category()]),
            MockResourceCategoryRepository::default(),
        );

        assert!(service.execute("backend").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_category_with_resources_is_refused() {
        let query = MockResourceCategoryQuery {
            in_use: true,
            ..MockResourceCategoryQuery::with(vec![sample_resource_category()])
        };
        let service =
            DeleteResourceCategoryService::new(query, MockResourceCategoryRepository::default());

        assert!(matches!(
            service.execute("backend").await.unwrap_err(),
            DeleteResourceCategoryError::CategoryHasResources
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let service = DeleteResourceCategoryService::new(
            MockResourceCategoryQuery::default(),
            MockResourceCategoryRepository::default(),
        );

        assert!(matches!(
            service.execute("nope").await.unwrap_err(),
            DeleteResourceCategoryError::CategoryNotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_foreign_key_race() {
        let service = DeleteResourceCategoryService::new(
            MockResourceCategoryQuery::with(vec![sample_resource_category()]),
            MockResourceCategoryRepository::failing(ResourceCategoryRepositoryError::InUse),
        );

        assert!(matches!(
            service.execute("backend").await.unwrap_err(),
            DeleteResourceCategoryError::CategoryHasResources
        ));
    }
}
