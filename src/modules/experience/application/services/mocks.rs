use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceData, ExperienceQuery, ExperienceQueryError, ExperienceRepository,
    ExperienceRepositoryError,
};
use crate::tests::support::fixtures::sample_experience;

// ──────────────────────────────────────────────────────────
// Mock Query
// ──────────────────────────────────────────────────────────

/// Slug ownership is read from `owners`; `failure` overrides every call.
#[derive(Clone, Default)]
pub struct MockExperienceQuery {
    pub experiences: Vec<Experience>,
    pub owners: HashMap<String, Uuid>,
    pub failure: Option<ExperienceQueryError>,
}

impl MockExperienceQuery {
    pub fn with_experiences(experiences: Vec<Experience>) -> Self {
        let owners = experiences
            .iter()
            .map(|e| (e.slug.clone(), e.id))
            .collect();
        Self {
            experiences,
            owners,
            failure: None,
        }
    }

    pub fn failing(err: ExperienceQueryError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ExperienceQueryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExperienceQuery for MockExperienceQuery {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        self.check()?;
        Ok(self.experiences.clone())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Experience, ExperienceQueryError> {
        self.check()?;
        self.experiences
            .iter()
            .find(|e| e.slug == slug)
            .cloned()
            .ok_or(ExperienceQueryError::NotFound)
    }

    async fn find_slug_owner(&self, slug: &str) -> Result<Option<Uuid>, ExperienceQueryError> {
        self.check()?;
        Ok(self.owners.get(slug).copied())
    }
}

// ──────────────────────────────────────────────────────────
// Mock Repository
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockExperienceRepository {
    pub error: Option<ExperienceRepositoryError>,
    pub slug_updates: Arc<Mutex<Vec<(Uuid, String)>>>,
}

impl MockExperienceRepository {
    pub fn failing(error: ExperienceRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn recorded_slug_updates(&self) -> Vec<(Uuid, String)> {
        self.slug_updates.lock().unwrap().clone()
    }

    fn stored(&self, data: ExperienceData) -> Result<Experience, ExperienceRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut experience = sample_experience();
        experience.title = data.title;
        experience.company = data.company;
        experience.slug = data.slug;
        experience.end_date = data.end_date;
        Ok(experience)
    }
}

#[async_trait]
impl ExperienceRepository for MockExperienceRepository {
    async fn create_experience(
        &self,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        self.stored(data)
    }

    async fn update_experience(
        &self,
        _slug: &str,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        self.stored(data)
    }

    async fn delete_experience(&self, _slug: &str) -> Result<(), ExperienceRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn update_slug(&self, id: Uuid, slug: &str) -> Result<(), ExperienceRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.slug_updates.lock().unwrap().push((id, slug.to_string()));
        Ok(())
    }
}
