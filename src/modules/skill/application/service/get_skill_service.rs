use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillError, GetSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

pub struct GetSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillUseCase for GetSkillService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Skill, GetSkillError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            SkillQueryError::NotFound => GetSkillError::SkillNotFound,
            other => GetSkillError::QueryError(other.to_string()),
        })
    }
}
