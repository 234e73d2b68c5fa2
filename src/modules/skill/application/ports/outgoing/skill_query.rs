use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Ordered by `order`, each with its category.
    async fn list(&self) -> Result<Vec<Skill>, SkillQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Skill, SkillQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillQueryError>;

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, SkillQueryError>;
}
