mod create_resource_category;
mod delete_resource_category;
mod get_resource_categories;
mod get_resource_category;
mod resource_category_request;
mod update_resource_category;

pub use create_resource_category::*;
pub use delete_resource_category::*;
pub use get_resource_categories::*;
pub use get_resource_category::*;
pub use resource_category_request::ResourceCategoryRequest;
pub use update_resource_category::*;
