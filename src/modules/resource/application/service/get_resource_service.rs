use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    GetResourceError, GetResourceUseCase,
};
use crate::modules::resource::application::ports::outgoing::{ResourceQuery, ResourceQueryError};

pub struct GetResourceService<Q>
where
    Q: ResourceQuery,
{
    query: Q,
}

impl<Q> GetResourceService<Q>
where
    Q: ResourceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetResourceUseCase for GetResourceService<Q>
where
    Q: ResourceQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Resource, GetResourceError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            ResourceQueryError::NotFound => GetResourceError::ResourceNotFound,
            other => GetResourceError::QueryError(other.to_string()),
        })
    }
}
