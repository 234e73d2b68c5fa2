use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource::adapter::incoming::web::routes::ResourceRequest;
use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    CreateResourceError, ResourceCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/resources",
    tag = "resources",
    request_body = ResourceRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Resource created", body = inline(SuccessResponse<Resource>)),
        (status = 400, description = "Validation error or unknown type", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "Category does not exist", body = ErrorResponse),
        (status = 409, description = "A resource with this title exists", body = ErrorResponse),
    )
)]
#[post("/api/resources")]
pub async fn create_resource_handler(
    _admin: AdminAccess,
    req: web::Json<ResourceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ResourceCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(error = %err, "Rejected resource input");
            return ApiResponse::validation_failed(&err);
        }
    };

    match data.resource.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_resource_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_resource_error(err: CreateResourceError) -> HttpResponse {
    match err {
        CreateResourceError::SlugAlreadyExists => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A resource with this title already exists",
        ),
        CreateResourceError::CategoryNotFound => ApiResponse::not_found(
            "RESOURCE_CATEGORY_NOT_FOUND",
            "Resource category not found",
        ),
        CreateResourceError::RepositoryError(e) => {
            error!("Repository error creating resource: {}", e);
            ApiResponse::internal_error()
        }
    }
}
