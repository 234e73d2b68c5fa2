use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, ExperienceCommand,
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
    path = "/api/experiences",
    tag = "experiences",
    request_body = ExperienceRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 409, description = "Same title at the same company exists", body = ErrorResponse),
    )
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminAccess,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ExperienceCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(error = %err, "Rejected experience input");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.experience.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_experience_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_experience_error(err: CreateExperienceError) -> HttpResponse {
    match err {
        CreateExperienceError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "An experience with this title and company already exists",
        ),
        CreateExperienceError::RepositoryError(e) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
