use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource_category::application::ports::incoming::use_cases::DeleteResourceCategoryError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/resource-categories/{slug}",
    tag = "resource-categories",
    params(("slug" = String, Path, description = "Category slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Category deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
        (status = 409, description = "Resources still use the category", body = ErrorResponse),
    )
)]
#[delete("/api/resource-categories/{slug}")]
pub async fn delete_resource_category_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.resource_category.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Resource category deleted successfully"),
        Err(DeleteResourceCategoryError::CategoryNotFound) => ApiResponse::not_found(
            "RESOURCE_CATEGORY_NOT_FOUND",
            "Resource category not found",
        ),
        Err(DeleteResourceCategoryError::CategoryHasResources) => {
            warn!(slug = %slug, "Refused to delete resource category in use");
            ApiResponse::conflict(
                "CATEGORY_HAS_RESOURCES",
                "Cannot delete a category that still has resources",
            )
        }
        Err(DeleteResourceCategoryError::RepositoryError(e)) => {
            error!(slug = %slug, "Failed to delete resource category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
