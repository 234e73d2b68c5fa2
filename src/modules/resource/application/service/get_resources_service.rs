use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};
use crate::modules::resource::application::ports::incoming::use_cases::{
    GetResourcesError, GetResourcesUseCase,
};
use crate::modules::resource::application::ports::outgoing::ResourceQuery;

pub struct GetResourcesService<Q>
where
    Q: ResourceQuery,
{
    query: Q,
}

impl<Q> GetResourcesService<Q>
where
    Q: ResourceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResourcesUseCase for GetResourcesService<Q>
where
    Q: ResourceQuery + Send + Sync,
{
    async fn execute(&self, filter: ResourceFilter) -> Result<Vec<Resource>, GetResourcesError> {
        self.query
            .list(&filter)
            .await
            .map_err(|e| GetResourcesError::QueryError(e.to_string()))
    }
}
