use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    SkillCategoryCommand, UpdateSkillCategoryError, UpdateSkillCategoryUseCase,
};
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryQuery, SkillCategoryRepository, SkillCategoryRepositoryError,
};
use crate::shared::slug::normalize_path_slug;

pub struct UpdateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateSkillCategoryUseCase for UpdateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery + Send + Sync,
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        command: SkillCategoryCommand,
    ) -> Result<SkillCategory, UpdateSkillCategoryError> {
        let slug = normalize_path_slug(slug);

        if command.slug() != slug.as_str() {
            let taken = self
                .query
                .slug_exists(command.slug())
                .await
                .map_err(|e| UpdateSkillCategoryError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateSkillCategoryError::SlugAlreadyExists);
            }
        }

        self.repository
            .update_category(&slug, command.into_data())
            .await
            .map_err(|e| match e {
                SkillCategoryRepositoryError::NotFound => UpdateSkillCategoryError::CategoryNotFound,
                SkillCategoryRepositoryError::SlugAlreadyExists => {
                    UpdateSkillCategoryError::SlugAlreadyExists
                }
                other => UpdateSkillCategoryError::RepositoryError(other.to_string()),
            })
    }
}
