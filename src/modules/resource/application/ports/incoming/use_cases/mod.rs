mod create_resource;
mod delete_resource;
mod get_resource;
mod get_resources;
mod resource_command;
mod update_resource;

pub use create_resource::{CreateResourceError, CreateResourceUseCase};
pub use delete_resource::{DeleteResourceError, DeleteResourceUseCase};
pub use get_resource::{GetResourceError, GetResourceUseCase};
pub use get_resources::{GetResourcesError, GetResourcesUseCase};
pub use resource_command::{ResourceCommand, ResourceInput};
pub use update_resource::{UpdateResourceError, UpdateResourceUseCase};
