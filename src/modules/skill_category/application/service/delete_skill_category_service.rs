use async_trait::async_trait;

use crate::modules::skill_category::application::ports::incoming::use_cases::{
    DeleteSkillCategoryError, DeleteSkillCategoryUseCase,
};
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryQuery, SkillCategoryQueryError, SkillCategoryRepository,
    SkillCategoryRepositoryError,
};

pub struct DeleteSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery,
    R: SkillCategoryRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteSkillCategoryUseCase for DeleteSkillCategoryService<Q, R>
where
    Q: SkillCategoryQuery + Send + Sync,
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<(), DeleteSkillCategoryError> {
        let category = self.query.get_by_slug(slug).await.map_err(|e| match e {
            SkillCategoryQueryError::NotFound => DeleteSkillCategoryError::CategoryNotFound,
            other => DeleteSkillCategoryError::RepositoryError(other.to_string()),
        })?;

        let has_skills = self
            .query
            .has_skills(category.id)
            .await
            .map_err(|e| DeleteSkillCategoryError::RepositoryError(e.to_string()))?;

        if has_skills {
            return Err(DeleteSkillCategoryError::CategoryHasSkills);
        }

        self.repository
            .delete_category(slug)
            .await
            .map_err(|e| match e {
                SkillCategoryRepositoryError::NotFound => DeleteSkillCategoryError::CategoryNotFound,
                SkillCategoryRepositoryError::InUse => DeleteSkillCategoryError::CategoryHasSkills,
                other => DeleteSkillCategoryError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill_category::application::service::mocks::{
        MockSkillCategoryQuery, MockSkillCategoryRepository,
    };
    use crate::tests::support::fixtures::sample_skill_category;

    #[tokio::test]
    async fn test_delete_category_with_skills_is_refused() {
        let service = DeleteSkillCategoryService::new(
            MockSkillCategoryQuery::with(vec![sample_skill_category()]),
            MockSkillCategoryRepository::default(),
        );

        assert!(matches!(
            service.execute("backend").await.unwrap_err(),
            DeleteSkillCategoryError::CategoryHasSkills
        ));
    }

    #[tokio::test]
    async fn test_delete_empty_category() {
        let mut empty = sample_skill_category();
        empty.skills.clear();

        let service = DeleteSkillCategoryService::new(
            MockSkillCategoryQuery::with(vec![empty]),
            MockSkillCategoryRepository::default(),
        );

        assert!(service.execute("backend").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let service = DeleteSkillCategoryService::new(
            MockSkillCategoryQuery::default(),
            MockSkillCategoryRepository::default(),
        );

        assert!(matches!(
            service.execute("backend").await.unwrap_err(),
            DeleteSkillCategoryError::CategoryNotFound
        ));
    }
}
