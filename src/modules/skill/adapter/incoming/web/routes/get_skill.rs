use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills/{slug}",
    tag = "skills",
    params(("slug" = String, Path, description = "Skill slug")),
    responses(
        (status = 200, description = "Skill with its category", body = inline(SuccessResponse<Skill>)),
        (status = 404, description = "No skill with this slug", body = ErrorResponse),
    )
)]
#[get("/api/skills/{slug}")]
pub async fn get_skill_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let slug = path.into_inner();

    match data.skill.get_single.execute(&slug).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(GetSkillError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(GetSkillError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
