use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    GetResourceCategoryError, GetResourceCategoryUseCase,
};
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryQuery, ResourceCategoryQueryError,
};

pub struct GetResourceCategoryService<Q>
where
    Q: ResourceCategoryQuery,
{
    query: Q,
}

impl<Q> GetResourceCategoryService<Q>
where
    Q: ResourceCategoryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResourceCategoryUseCase for GetResourceCategoryService<Q>
where
    Q: ResourceCategoryQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ResourceCategory, GetResourceCategoryError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            ResourceCategoryQueryError::NotFound => GetResourceCategoryError::CategoryNotFound,
            other => GetResourceCategoryError::QueryError(other.to_string()),
        })
    }
}
