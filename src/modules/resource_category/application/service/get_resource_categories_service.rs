use async_trait::async_trait;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    GetResourceCategoriesError, GetResourceCategoriesUseCase,
};
use crate::modules::resource_category::application::ports::outgoing::ResourceCategoryQuery;

pub struct GetResourceCategoriesService<Q>
where
    Q: ResourceCategoryQuery,
{
    query: Q,
}

impl<Q> GetResourceCategoriesService<Q>
where
    Q: ResourceCategoryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResourceCategoriesUseCase for GetResourceCategoriesService<Q>
where
    Q: ResourceCategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ResourceCategory>, GetResourceCategoriesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetResourceCategoriesError::QueryError(e.to_string()))
    }
}
