use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, CreateSkillCategoryUseCase, SkillCategoryCommand,
};
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryQuery, SkillCategoryRepository, SkillCategoryRepositoryError,
};

pub struct CreateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateSkillCategoryUseCase for CreateSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery + Send + Sync,
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SkillCategoryCommand,
    ) -> Result<SkillCategory, CreateSkillCategoryError> {
        if self
            .query
            .slug_exists(command.slug())
            .await
            .map_err(|e| CreateSkillCategoryError::RepositoryError(e.to_string()))?
        {
            return Err(CreateSkillCategoryError::SlugAlreadyExists);
        }

        self.repository
            .create_category(command.into_data())
            .await
            .map_err(|e| match e {
                SkillCategoryRepositoryError::SlugAlreadyExists => {
                    CreateSkillCategoryError::SlugAlreadyExists
                }
                other => CreateSkillCategoryError::RepositoryError(other.to_string()),
            })
    }
}
