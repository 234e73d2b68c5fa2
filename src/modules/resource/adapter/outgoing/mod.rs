mod category_lookup;
mod resource_query_postgres;
mod resource_repository_postgres;
pub mod sea_orm_entity;

pub use resource_query_postgres::ResourceQueryPostgres;
pub use resource_repository_postgres::ResourceRepositoryPostgres;
