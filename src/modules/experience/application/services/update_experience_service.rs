use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateExperienceService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateExperienceService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateExperienceUseCase for UpdateExperienceService<Q, R>
where
    Q: ExperienceQuery + Send + Sync,
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: ExperienceCommand,
    ) -> Result<Experience, UpdateExperienceError> {
        let slug = normalize_path_slug(slug);

        if command.slug() != slug.as_str() {
            let owner = self
                .query
                .find_slug_owner(command.slug())
                .await
                .map_err(|e| UpdateExperienceError::RepositoryError(e.to_string()))?;

            if owner.is_some() {
                return Err(UpdateExperienceError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_experience(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::ExperienceNotFound,
                ExperienceRepositoryError::SlugAlreadyExists => {
                    UpdateExperienceError::SlugAlreadyExists
                }
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })
    }
}
