use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{
    SkillData, SkillQuery, SkillQueryError, SkillRepository, SkillRepositoryError,
};
use crate::tests::support::fixtures::sample_skill;

#[derive(Clone, Default)]
pub struct MockSkillQuery {
    pub skills: Vec<Skill>,
    pub categories: Vec<Uuid>,
}

impl MockSkillQuery {
    pub fn with(skills: Vec<Skill>, categories: Vec<Uuid>) -> Self {
        Self { skills, categories }
    }
}

#[async_trait]
impl SkillQuery for MockSkillQuery {
    async fn list(&self) -> Result<Vec<Skill>, SkillQueryError> {
        Ok(self.skills.clone())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Skill, SkillQueryError> {
        self.skills
            .iter()
            .find(|s| s.slug == slug)
            .cloned()
            .ok_or(SkillQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillQueryError> {
        Ok(self.skills.iter().any(|s| s.slug == slug))
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, SkillQueryError> {
        Ok(self.categories.contains(&category_id))
    }
}

/// Records the last write so tests can inspect what reached the port.
#[derive(Clone, Default)]
pub struct MockSkillRepository {
    pub error: Option<SkillRepositoryError>,
    pub last_write: Arc<Mutex<Option<SkillData>>>,
}

impl MockSkillRepository {
    pub fn failing(error: SkillRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn last_write(&self) -> Option<SkillData> {
        self.last_write.lock().unwrap().clone()
    }

    fn stored(&self, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        *self.last_write.lock().unwrap() = Some(data.clone());

        let mut skill = sample_skill();
        skill.name = data.name;
        skill.slug = data.slug;
        skill.proficiency = data.proficiency;
        skill.category_id = data.category_id;
        if let Some(order) = data.order {
            skill.order = order;
        }
        Ok(skill)
    }
}

#[async_trait]
impl SkillRepository for MockSkillRepository {
    async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        self.stored(data)
    }

    async fn update_skill(&self, _slug: &str, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        self.stored(data)
    }

    async fn delete_skill(&self, _slug: &str) -> Result<(), SkillRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
