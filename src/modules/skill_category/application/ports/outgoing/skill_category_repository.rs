use async_trait::async_trait;

use crate::modules::skill_category::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategoryData {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    /// `None` is stored as `0` on insert and update
    pub order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCategoryRepositoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Skill category slug already exists")]
    SlugAlreadyExists,

    #[error("Skill category still has skills")]
    InUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillCategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError>;

    async fn update_category(
        &self,
        slug: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError>;

    async fn delete_category(&self, slug: &str) -> Result<(), SkillCategoryRepositoryError>;
}
