use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    SkillCommand, UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillRepository, SkillRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateSkillUseCase for UpdateSkillService<Q, R>
where
    Q: SkillQuery + Send + Sync,
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, slug: &str, command: SkillCommand) -> Result<Skill, UpdateSkillError> {
        let category_known = self
            .query
            .category_exists(command.category_id())
            .await
            .map_err(|e| UpdateSkillError::RepositoryError(e.to_string()))?;

        if !category_known {
            return Err(UpdateSkillError::CategoryNotFound);
        }

        let slug = normalize_path_slug(slug);

        if command.slug() != slug.as_str() {
            let taken = self
                .query
                .slug_exists(command.slug())
                .await
                .map_err(|e| UpdateSkillError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateSkillError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_skill(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::SkillNotFound,
                SkillRepositoryError::SlugAlreadyExists => UpdateSkillError::SlugAlreadyExists,
                SkillRepositoryError::CategoryNotFound => UpdateSkillError::CategoryNotFound,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}
