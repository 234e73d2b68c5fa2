mod skill_category_query;
mod skill_category_repository;

pub use skill_category_query::{SkillCategoryQuery, SkillCategoryQueryError};
pub use skill_category_repository::{
    SkillCategoryData, SkillCategoryRepository, SkillCategoryRepositoryError,
};
