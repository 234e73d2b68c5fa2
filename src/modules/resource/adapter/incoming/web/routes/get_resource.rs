use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::GetResourceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/resources/{slug}",
    tag = "resources",
    params(("slug" = String, Path, description = "Resource slug")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Resource with its category", body = inline(SuccessResponse<Resource>)),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No resource with this slug", body = ErrorResponse),
    )
)]
#[get("/api/resources/{slug}")]
pub async fn get_resource_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.resource.get_single.execute(&slug).await {
        Ok(resource) => ApiResponse::success(resource),
        Err(GetResourceError::ResourceNotFound) => {
            ApiResponse::not_found("RESOURCE_NOT_FOUND", "Resource not found")
        }
        Err(GetResourceError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load resource: {}", e);
            ApiResponse::internal_error()
        }
    }
}
