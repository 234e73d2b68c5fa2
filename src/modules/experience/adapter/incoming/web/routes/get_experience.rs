use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{slug}",
    tag = "experiences",
    params(("slug" = String, Path, description = "Experience slug")),
    responses(
        (status = 200, description = "Experience found", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "No experience with this slug", body = ErrorResponse),
    )
)]
#[get("/api/experiences/{slug}")]
pub async fn get_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.experience.get_single.execute(&slug).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(GetExperienceError::ExperienceNotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(GetExperienceError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
