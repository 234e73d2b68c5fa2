mod create_resource_category;
mod delete_resource_category;
mod get_resource_categories;
mod get_resource_category;
mod resource_category_command;
mod update_resource_category;

pub use create_resource_category::{CreateResourceCategoryError, CreateResourceCategoryUseCase};
pub use delete_resource_category::{DeleteResourceCategoryError, DeleteResourceCategoryUseCase};
pub use get_resource_categories::{GetResourceCategoriesError, GetResourceCategoriesUseCase};
pub use get_resource_category::{GetResourceCategoryError, GetResourceCategoryUseCase};
pub use resource_category_command::{ResourceCategoryCommand, ResourceCategoryInput};
pub use update_resource_category::{UpdateResourceCategoryError, UpdateResourceCategoryUseCase};
