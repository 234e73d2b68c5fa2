use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill_category::application::ports::incoming::use_cases::DeleteSkillCategoryError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/skill-categories/{slug}",
    tag = "skill-categories",
    params(("slug" = String, Path, description = "Category slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Category deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Category still has skills", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
    )
)]
#[delete("/api/skill-categories/{slug}")]
pub async fn delete_skill_category_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.skill_category.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Skill category deleted successfully"),
        Err(DeleteSkillCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", "Skill category not found")
        }
        Err(DeleteSkillCategoryError::CategoryHasSkills) => {
            warn!(slug = %slug, "Refused to delete skill category with skills");
            ApiResponse::bad_request(
                "CATEGORY_HAS_SKILLS",
                "Cannot delete a category that still has skills",
            )
        }
        Err(DeleteSkillCategoryError::RepositoryError(e)) => {
            error!(slug = %slug, "Failed to delete skill category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
