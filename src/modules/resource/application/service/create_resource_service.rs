use async_trait::async_trait;

use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    CreateResourceError, CreateResourceUseCase, ResourceCommand,
};
use crate::modules::resource::application::ports::outgoing::{
    ResourceQuery, ResourceRepository, ResourceRepositoryError,
};

pub struct CreateResourceService<Q, R>
where
    Q: ResourceQuery,
    R: ResourceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateResourceService<Q, R>
where
    Q: ResourceQuery,
    R: ResourceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateResourceUseCase for CreateResourceService<Q, R>
where
    Q: ResourceQuery + Send + Sync,
    R: ResourceRepository + Send + Sync,
{
    async fn execute(&self, command: ResourceCommand) -> Result<Resource, CreateResourceError> {
        let category_known = self
            .query
            .category_exists(command.category_id())
            .await
            .map_err(|e| CreateResourceError::RepositoryError(e.to_string()))?;

        if !category_known {
            return Err(CreateResourceError::CategoryNotFound);
        }

        let taken = self
            .query
            .slug_exists(command.slug())
            .await
            .map_err(|e| CreateResourceError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(CreateResourceError::SlugAlreadyExists);
        }

        self.repository
            .create_resource(command.into_data())
            .await
            .map_err(|e| match e {
                ResourceRepositoryError::SlugAlreadyExists => {
                    CreateResourceError::SlugAlreadyExists
                }
                ResourceRepositoryError::CategoryNotFound => CreateResourceError::CategoryNotFound,
                other => CreateResourceError::RepositoryError(other.to_string()),
            })
    }
}
