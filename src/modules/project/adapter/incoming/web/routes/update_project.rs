use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::project::adapter::incoming::web::routes::ProjectRequest;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectCommand, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Current project slug")),
    request_body = ProjectRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project replaced; slug follows the new title", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
        (status = 409, description = "Another project owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/projects/{slug}")]
pub async fn update_project_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match ProjectCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(slug = %slug, error = %err, "Rejected project update");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.project.update.execute(&slug, command).await {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_update_project_error(&slug, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_project_error(slug: &str, err: UpdateProjectError) -> HttpResponse {
    match err {
        UpdateProjectError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        UpdateProjectError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A project with this title already exists",
        ),
        UpdateProjectError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
