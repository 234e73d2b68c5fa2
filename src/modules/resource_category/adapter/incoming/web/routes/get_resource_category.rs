use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::GetResourceCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/resource-categories/{slug}",
    tag = "resource-categories",
    params(("slug" = String, Path, description = "Category slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Category found", body = inline(SuccessResponse<ResourceCategory>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
    )
)]
#[get("/api/resource-categories/{slug}")]
pub async fn get_resource_category_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.resource_category.get_single.execute(&slug).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetResourceCategoryError::CategoryNotFound) => ApiResponse::not_found(
            "RESOURCE_CATEGORY_NOT_FOUND",
            "Resource category not found",
        ),
        Err(GetResourceCategoryError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load resource category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
