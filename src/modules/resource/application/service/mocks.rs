use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};
use crate::modules::resource::application::ports::outgoing::{
    ResourceData, ResourceQuery, ResourceQueryError, ResourceRepository,
    ResourceRepositoryError,
};
use crate::tests::support::fixtures::sample_resource;

#[derive(Clone, Default)]
pub struct MockResourceQuery {
    pub resources: Vec<Resource>,
    pub categories: Vec<Uuid>,
    pub last_filter: Arc<Mutex<Option<ResourceFilter>>>,
}

impl MockResourceQuery {
    pub fn with(resources: Vec<Resource>, categories: Vec<Uuid>) -> Self {
        Self {
            resources,
            categories,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ResourceQuery for MockResourceQuery {
    async fn list(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ResourceQueryError> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        Ok(self.resources.clone())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Resource, ResourceQueryError> {
        self.resources
            .iter()
            .find(|r| r.slug == slug)
            .cloned()
            .ok_or(ResourceQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceQueryError> {
        Ok(self.resources.iter().any(|r| r.slug == slug))
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, ResourceQueryError> {
        Ok(self.categories.contains(&category_id))
    }
}

#[derive(Clone, Default)]
pub struct MockResourceRepository {
    pub error: Option<ResourceRepositoryError>,
}

impl MockResourceRepository {
    pub fn failing(error: ResourceRepositoryError) -> Self {
        Self { error: Some(error) }
    }

    fn stored(&self, data: ResourceData) -> Result<Resource, ResourceRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut resource = sample_resource();
        resource.title = data.title;
        resource.slug = data.slug;
        resource.kind = data.kind;
        resource.category_id = data.category_id;
        resource.tags = data.tags;
        Ok(resource)
    }
}

#[async_trait]
impl ResourceRepository for MockResourceRepository {
    async fn create_resource(&self, data: ResourceData) -> Result<Resource, ResourceRepositoryError> {
        self.stored(data)
    }

    async fn update_resource(
        &self,
        _slug: &str,
        data: ResourceData,
    ) -> Result<Resource, ResourceRepositoryError> {
        self.stored(data)
    }

    async fn delete_resource(&self, _slug: &str) -> Result<(), ResourceRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
