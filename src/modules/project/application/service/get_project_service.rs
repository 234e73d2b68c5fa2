use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectUseCase for GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectError::ProjectNotFound,
            other => GetProjectError::QueryError(other.to_string()),
        })
    }
}
