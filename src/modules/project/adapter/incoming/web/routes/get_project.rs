use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_single.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetProjectError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
