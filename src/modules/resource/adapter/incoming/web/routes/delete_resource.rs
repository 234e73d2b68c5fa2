use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource::application::ports::incoming::use_cases::DeleteResourceError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/resources/{slug}",
    tag = "resources",
    params(("slug" = String, Path, description = "Resource slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Resource deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No resource with this slug", body = ErrorResponse),
    )
)]
#[delete("/api/resources/{slug}")]
pub async fn delete_resource_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.resource.delete.execute(&slug).await {
        Ok(()) => ApiResponse::message("Resource deleted successfully"),
        Err(DeleteResourceError::ResourceNotFound) => {
            ApiResponse::not_found("RESOURCE_NOT_FOUND", "Resource not found")
        }
        Err(DeleteResourceError::RepositoryError(e)) => {
            error!(slug = %slug, "Failed to delete resource: {}", e);
            ApiResponse::internal_error()
        }
    }
}
