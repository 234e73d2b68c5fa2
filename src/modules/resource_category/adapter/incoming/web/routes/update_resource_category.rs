use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource_category::adapter::incoming::web::routes::ResourceCategoryRequest;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    ResourceCategoryCommand, UpdateResourceCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/resource-categories/{slug}",
    tag = "resource-categories",
    params(("slug" = String, Path, description = "Current category slug")),
    request_body = ResourceCategoryRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Category updated", body = inline(SuccessResponse<ResourceCategory>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
        (status = 409, description = "Another category owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/resource-categories/{slug}")]
pub async fn update_resource_category_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<ResourceCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match ResourceCategoryCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.resource_category.update.execute(&slug, command).await {
        Ok(category) => ApiResponse::success(category),
        Err(err) => map_update_error(&slug, err),
    }
}

fn map_update_error(slug: &str, err: UpdateResourceCategoryError) -> HttpResponse {
    match err {
        UpdateResourceCategoryError::CategoryNotFound => ApiResponse::not_found(
            "RESOURCE_CATEGORY_NOT_FOUND",
            "Resource category not found",
        ),
        UpdateResourceCategoryError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A resource category with this name already exists",
        ),
        UpdateResourceCategoryError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating resource category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
