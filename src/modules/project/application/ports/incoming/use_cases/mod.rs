mod create_project;
mod delete_project;
mod get_project;
mod get_projects;
mod project_command;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use project_command::{ProjectCommand, ProjectInput};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
