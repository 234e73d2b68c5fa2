mod skill_query;
mod skill_repository;

pub use skill_query::{SkillQuery, SkillQueryError};
pub use skill_repository::{SkillData, SkillRepository, SkillRepositoryError};
