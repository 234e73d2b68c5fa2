use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillData {
    pub name: String,
    pub slug: String,
    pub proficiency: i16,
    pub category_id: Uuid,
    /// `None` keeps the stored order on update, `0` on insert
    pub order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Skill slug already exists")]
    SlugAlreadyExists,

    #[error("Skill category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError>;

    async fn update_skill(&self, slug: &str, data: SkillData)
        -> Result<Skill, SkillRepositoryError>;

    async fn delete_skill(&self, slug: &str) -> Result<(), SkillRepositoryError>;
}
