use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::skill_category::adapter::incoming::web::routes::SkillCategoryRequest;
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, SkillCategoryCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/skill-categories",
    tag = "skill-categories",
    request_body = SkillCategoryRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<SkillCategory>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 409, description = "A category with this name exists", body = ErrorResponse),
    )
)]
#[post("/api/skill-categories")]
pub async fn create_skill_category_handler(
    _admin: AdminAccess,
    req: web::Json<SkillCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SkillCategoryCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.skill_category.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateSkillCategoryError) -> HttpResponse {
    match err {
        CreateSkillCategoryError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A skill category with this name already exists",
        ),
        CreateSkillCategoryError::RepositoryError(e) => {
            error!("Repository error creating skill category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
