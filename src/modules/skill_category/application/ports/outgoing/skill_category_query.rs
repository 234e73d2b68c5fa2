use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill_category::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCategoryQueryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side. Every returned category carries its skills sorted by `order`.
#[async_trait]
pub trait SkillCategoryQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<SkillCategory>, SkillCategoryQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<SkillCategory, SkillCategoryQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillCategoryQueryError>;

    async fn has_skills(&self, category_id: Uuid) -> Result<bool, SkillCategoryQueryError>;
}
