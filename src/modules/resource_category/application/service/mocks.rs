use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryData, ResourceCategoryQuery, ResourceCategoryQueryError,
    ResourceCategoryRepository, ResourceCategoryRepositoryError,
};
use crate::tests::support::fixtures::sample_resource_category;

#[derive(Clone, Default)]
pub struct MockResourceCategoryQuery {
    pub categories: Vec<ResourceCategory>,
    pub in_use: bool,
    pub failure: Option<ResourceCategoryQueryError>,
}

impl MockResourceCategoryQuery {
    pub fn with(categories: Vec<ResourceCategory>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ResourceCategoryQueryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceCategoryQuery for MockResourceCategoryQuery {
    async fn list(&self) -> Result<Vec<ResourceCategory>, ResourceCategoryQueryError> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<ResourceCategory, ResourceCategoryQueryError> {
        self.check()?;
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or(ResourceCategoryQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceCategoryQueryError> {
        self.check()?;
        Ok(self.categories.iter().any(|c| c.slug == slug))
    }

    async fn has_resources(&self, _category_id: Uuid) -> Result<bool, ResourceCategoryQueryError> {
        self.check()?;
        Ok(self.in_use)
    }
}

#[derive(Clone, Default)]
pub struct MockResourceCategoryRepository {
    pub error: Option<ResourceCategoryRepositoryError>,
}

impl MockResourceCategoryRepository {
    pub fn failing(error: ResourceCategoryRepositoryError) -> Self {
        Self { error: Some(error) }
    }

    fn stored(
        &self,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut category = sample_resource_category();
        category.name = data.name;
        category.slug = data.slug;
        category.order = data.order.unwrap_or(0);
        Ok(category)
    }
}

#[async_trait]
impl ResourceCategoryRepository for MockResourceCategoryRepository {
    async fn create_category(
        &self,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError> {
        self.stored(data)
    }

    async fn update_category(
        &self,
        _slug: &str,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError> {
        self.stored(data)
    }

    async fn delete_category(&self, _slug: &str) -> Result<(), ResourceCategoryRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
