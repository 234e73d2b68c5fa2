use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource::adapter::incoming::web::routes::ResourceListParams;
use crate::modules::resource::application::domain::entities::Resource;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/resources",
    tag = "resources",
    params(ResourceListParams),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Matching resources with their category", body = [Resource]),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    )
)]
#[get("/api/resources")]
pub async fn get_resources_handler(
    _admin: AdminAccess,
    params: web::Query<ResourceListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match params.into_inner().into_filter() {
        Ok(filter) => filter,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.resource.get_list.execute(filter).await {
        Ok(resources) => ApiResponse::success(resources),
        Err(e) => {
            error!("Failed to list resources: {}", e);
            ApiResponse::internal_error()
        }
    }
}
