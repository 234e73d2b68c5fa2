use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill_category::adapter::incoming::web::routes::SkillCategoryRequest;
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    SkillCategoryCommand, UpdateSkillCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/skill-categories/{slug}",
    tag = "skill-categories",
    params(("slug" = String, Path, description = "Current category slug")),
    request_body = SkillCategoryRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Category replaced", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
        (status = 409, description = "Another category owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/skill-categories/{slug}")]
pub async fn update_skill_category_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<SkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match SkillCategoryCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.skill_category.update.execute(&slug, command).await {
        Ok(category) => ApiResponse::success(category),
        Err(err) => map_update_error(&slug, err),
    }
}

fn map_update_error(slug: &str, err: UpdateSkillCategoryError) -> HttpResponse {
    match err {
        UpdateSkillCategoryError::CategoryNotFound => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", "Skill category not found")
        }
        UpdateSkillCategoryError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A skill category with this name already exists",
        ),
        UpdateSkillCategoryError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating skill category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
