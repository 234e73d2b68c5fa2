use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    GetSkillCategoriesError, GetSkillCategoriesUseCase,
};
use crate::modules::skill_category::application::ports::outgoing::SkillCategoryQuery;

pub struct GetSkillCategoriesService<Q>
where
    Q: SkillCategoryQuery,
{
    query: Q,
}

impl<Q> GetSkillCategoriesService<Q>
where
    Q: SkillCategoryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillCategoriesUseCase for GetSkillCategoriesService<Q>
where
    Q: SkillCategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillCategory>, GetSkillCategoriesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetSkillCategoriesError::QueryError(e.to_string()))
    }
}
