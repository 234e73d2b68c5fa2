mod create_project;
mod delete_project;
mod get_project;
mod get_projects;
mod project_request;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project::*;
pub use get_projects::*;
pub use project_request::ProjectRequest;
pub use update_project::*;
