mod create_resource_category_service;
mod delete_resource_category_service;
mod get_resource_categories_service;
mod get_resource_category_service;
mod update_resource_category_service;

#[cfg(test)]
mod mocks;

pub use create_resource_category_service::CreateResourceCategoryService;
pub use delete_resource_category_service::DeleteResourceCategoryService;
pub use get_resource_categories_service::GetResourceCategoriesService;
pub use get_resource_category_service::GetResourceCategoryService;
pub use update_resource_category_service::UpdateResourceCategoryService;
