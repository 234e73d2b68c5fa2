use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    GetSkillCategoryError, GetSkillCategoryUseCase,
};
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryQuery, SkillCategoryQueryError,
};

pub struct GetSkillCategoryService<Q>
where
    Q: SkillCategoryQuery,
{
    query: Q,
}

impl<Q> GetSkillCategoryService<Q>
where
    Q: SkillCategoryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillCategoryUseCase for GetSkillCategoryService<Q>
where
    Q: SkillCategoryQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<SkillCategory, GetSkillCategoryError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            SkillCategoryQueryError::NotFound => GetSkillCategoryError::CategoryNotFound,
            other => GetSkillCategoryError::QueryError(other.to_string()),
        })
    }
}
