use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
    )
)]
#[delete("/api/projects/{slug}")]
pub async fn delete_project_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Project deleted successfully"),
        Err(DeleteProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!(slug = %slug, "Repository error deleting project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
