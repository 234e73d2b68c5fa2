use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::project::adapter::incoming::web::routes::ProjectRequest;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, ProjectCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 409, description = "A project with this slug exists", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminAccess,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ProjectCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(error = %err, "Rejected project input");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.project.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_project_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_project_error(err: CreateProjectError) -> HttpResponse {
    match err {
        CreateProjectError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A project with this title already exists",
        ),
        CreateProjectError::RepositoryError(e) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
