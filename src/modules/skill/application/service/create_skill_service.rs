use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, SkillCommand,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillRepository, SkillRepositoryError,
};

pub struct CreateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateSkillUseCase for CreateSkillService<Q, R>
where
    Q: SkillQuery + Send + Sync,
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, command: SkillCommand) -> Result<Skill, CreateSkillError> {
        let category_known = self
            .query
            .category_exists(command.category_id())
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?;

        if !category_known {
            return Err(CreateSkillError::CategoryNotFound);
        }

        let taken = self
            .query
            .slug_exists(command.slug())
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(CreateSkillError::SlugAlreadyExists);
        }

        self.repository
            .create_skill(command.into_data())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::SlugAlreadyExists => CreateSkillError::SlugAlreadyExists,
                SkillRepositoryError::CategoryNotFound => CreateSkillError::CategoryNotFound,
                other => CreateSkillError::RepositoryError(other.to_string()),
            })
    }
}
