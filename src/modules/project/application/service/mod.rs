mod create_project_service;
mod delete_project_service;
mod get_project_service;
mod get_projects_service;
mod update_project_service;

#[cfg(test)]
mod mocks;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_project_service::GetProjectService;
pub use get_projects_service::GetProjectsService;
pub use update_project_service::UpdateProjectService;
