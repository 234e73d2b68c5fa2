use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/experiences/{slug}",
    tag = "experiences",
    params(("slug" = String, Path, description = "Experience slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Experience deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No experience with this slug", body = ErrorResponse),
    )
)]
#[delete("/api/experiences/{slug}")]
pub async fn delete_experience_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.experience.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Experience deleted successfully"),
        Err(DeleteExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!(slug = %slug, "Failed to delete experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
