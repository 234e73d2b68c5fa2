use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource::adapter::incoming::web::routes::ResourceRequest;
use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    ResourceCommand, UpdateResourceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/resources/{slug}",
    tag = "resources",
    params(("slug" = String, Path, description = "Current resource slug")),
    request_body = ResourceRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Resource replaced", body = inline(SuccessResponse<Resource>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No such resource or category", body = ErrorResponse),
        (status = 409, description = "Another resource owns the new slug", body = ErrorResponse),
    )
)]
#[put("/api/resources/{slug}")]
pub async fn update_resource_handler(
    _admin: AdminAccess,
    path: web::Path<String>,
    req: web::Json<ResourceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match ResourceCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(slug = %slug, error = %err, "Rejected resource update");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.resource.update.execute(&slug, command).await {
        Ok(resource) => ApiResponse::success(resource),
        Err(err) => map_update_resource_error(&slug, err),
    }
}

fn map_update_resource_error(slug: &str, err: UpdateResourceError) -> HttpResponse {
    match err {
        UpdateResourceError::ResourceNotFound => {
            ApiResponse::not_found("RESOURCE_NOT_FOUND", "Resource not found")
        }
        UpdateResourceError::CategoryNotFound => ApiResponse::not_found(
            "RESOURCE_CATEGORY_NOT_FOUND",
            "Resource category not found",
        ),
        UpdateResourceError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A resource with this title already exists",
        ),
        UpdateResourceError::RepositoryError(e) => {
            error!(slug = %slug, "Repository error updating resource: {}", e);
            ApiResponse::internal_error()
        }
    }
}
