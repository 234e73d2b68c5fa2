mod create_resource;
mod delete_resource;
mod get_resource;
mod get_resources;
mod resource_request;
mod update_resource;

pub use create_resource::*;
pub use delete_resource::*;
pub use get_resource::*;
pub use get_resources::*;
pub use resource_request::{ResourceListParams, ResourceRequest};
pub use update_resource::*;
