mod resource_category_query_postgres;
mod resource_category_repository_postgres;
pub mod sea_orm_entity;

pub use resource_category_query_postgres::ResourceCategoryQueryPostgres;
pub use resource_category_repository_postgres::ResourceCategoryRepositoryPostgres;
