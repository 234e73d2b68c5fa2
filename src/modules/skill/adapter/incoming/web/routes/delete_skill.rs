use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/skills/{slug}",
    tag = "skills",
    params(("slug" = String, Path, description = "Skill slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Skill deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No skill with this slug", body = ErrorResponse),
    )
)]
#[delete("/api/skills/{slug}")]
pub async fn delete_skill_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.skill.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Skill deleted successfully"),
        Err(DeleteSkillError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(e)) => {
            error!(slug = %slug, "Failed to delete skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
