use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryData, SkillCategoryQuery, SkillCategoryQueryError, SkillCategoryRepository,
    SkillCategoryRepositoryError,
};
use crate::tests::support::fixtures::sample_skill_category;

#[derive(Clone, Default)]
pub struct MockSkillCategoryQuery {
    pub categories: Vec<SkillCategory>,
    pub failure: Option<SkillCategoryQueryError>,
}

impl MockSkillCategoryQuery {
    pub fn with(categories: Vec<SkillCategory>) -> Self {
        Self {
            categories,
            failure: None,
        }
    }

    fn check(&self) -> Result<(), SkillCategoryQueryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SkillCategoryQuery for MockSkillCategoryQuery {
    async fn list(&self) -> Result<Vec<SkillCategory>, SkillCategoryQueryError> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<SkillCategory, SkillCategoryQueryError> {
        self.check()?;
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or(SkillCategoryQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillCategoryQueryError> {
        self.check()?;
        Ok(self.categories.iter().any(|c| c.slug == slug))
    }

    async fn has_skills(&self, category_id: Uuid) -> Result<bool, SkillCategoryQueryError> {
        self.check()?;
        Ok(self
            .categories
            .iter()
            .any(|c| c.id == category_id && !c.skills.is_empty()))
    }
}

#[derive(Clone, Default)]
pub struct MockSkillCategoryRepository {
    pub error: Option<SkillCategoryRepositoryError>,
}

impl MockSkillCategoryRepository {
    pub fn failing(error: SkillCategoryRepositoryError) -> Self {
        Self { error: Some(error) }
    }

    fn stored(&self, data: SkillCategoryData) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut category = sample_skill_category();
        category.name = data.name;
        category.slug = data.slug;
        category.description = data.description;
        category.order = data.order.unwrap_or(0);
        category.skills.clear();
        Ok(category)
    }
}

#[async_trait]
impl SkillCategoryRepository for MockSkillCategoryRepository {
    async fn create_category(
        &self,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        self.stored(data)
    }

    async fn update_category(
        &self,
        _slug: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        self.stored(data)
    }

    async fn delete_category(&self, _slug: &str) -> Result<(), SkillCategoryRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
