mod resource_category_query;
mod resource_category_repository;

pub use resource_category_query::{ResourceCategoryQuery, ResourceCategoryQueryError};
pub use resource_category_repository::{
    ResourceCategoryData, ResourceCategoryRepository, ResourceCategoryRepositoryError,
};
