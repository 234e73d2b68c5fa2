mod skill_category_query_postgres;
mod skill_category_repository_postgres;
mod skill_lookup;
pub mod sea_orm_entity;

pub use skill_category_query_postgres::SkillCategoryQueryPostgres;
pub use skill_category_repository_postgres::SkillCategoryRepositoryPostgres;
