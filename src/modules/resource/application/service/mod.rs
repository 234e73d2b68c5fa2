mod create_resource_service;
mod delete_resource_service;
mod get_resource_service;
mod get_resources_service;
mod update_resource_service;

#[cfg(test)]
mod mocks;

pub use create_resource_service::CreateResourceService;
pub use delete_resource_service::DeleteResourceService;
pub use get_resource_service::GetResourceService;
pub use get_resources_service::GetResourcesService;
pub use update_resource_service::UpdateResourceService;
