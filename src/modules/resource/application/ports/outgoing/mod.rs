mod resource_query;
mod resource_repository;

pub use resource_query::{ResourceQuery, ResourceQueryError};
pub use resource_repository::{ResourceData, ResourceRepository, ResourceRepositoryError};
