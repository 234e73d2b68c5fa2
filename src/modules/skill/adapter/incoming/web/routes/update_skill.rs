use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill::adapter::incoming::web::routes::SkillRequest;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    SkillCommand, UpdateSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/skills/{slug}",
    tag = "skills",
    params(("slug" = String, Path, description = "Current skill slug")),
    request_body = SkillRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Skill replaced", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No such skill or category", body = ErrorResponse),
        (status = 409, description = "Another skill owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/skills/{slug}")]
pub async fn update_skill_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match SkillCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.skill.update.execute(&slug, command).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(err) => map_update_skill_error(&slug, err),
    }
}

fn map_update_skill_error(slug: &str, err: UpdateSkillError) -> HttpResponse {
    match err {
        UpdateSkillError::SkillNotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        UpdateSkillError::CategoryNotFound => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", "Skill category not found")
        }
        UpdateSkillError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A skill with this name already exists")
        }
        UpdateSkillError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
