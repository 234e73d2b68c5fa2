use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill::adapter::incoming::web::routes::SkillRequest;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, SkillCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error or proficiency out of range", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "Category does not exist", body = ErrorResponse),
        (status = 409, description = "A skill with this name exists", body = ErrorResponse),
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminAccess,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SkillCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.skill.create.execute(command).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(err) => map_create_skill_error(err),
    }
}

fn map_create_skill_error(err: CreateSkillError) -> HttpResponse {
    match err {
        CreateSkillError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A skill with this name already exists")
        }
        CreateSkillError::CategoryNotFound => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", "Skill category not found")
        }
        CreateSkillError::RepositoryError(e) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
