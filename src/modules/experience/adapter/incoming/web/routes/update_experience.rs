use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::experience::adapter::incoming::web::routes::ExperienceRequest;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ExperienceCommand, UpdateExperienceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/experiences/{slug}",
    tag = "experiences",
    params(("slug" = String, Path, description = "Current experience slug")),
    request_body = ExperienceRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Experience replaced", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No experience with this slug", body = ErrorResponse),
        (status = 409, description = "Another experience owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/experiences/{slug}")]
pub async fn update_experience_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<ExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match ExperienceCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(slug = %slug, error = %err, "Rejected experience update");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.experience.update.execute(&slug, command).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(err) => map_update_experience_error(&slug, err),
    }
}

fn map_update_experience_error(slug: &str, err: UpdateExperienceError) -> HttpResponse {
    match err {
        UpdateExperienceError::ExperienceNotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        UpdateExperienceError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "An experience with this title and company already exists",
        ),
        UpdateExperienceError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
