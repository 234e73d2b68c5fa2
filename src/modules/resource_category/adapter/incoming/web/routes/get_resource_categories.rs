use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/resource-categories",
    tag = "resource-categories",
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Categories by order, then name", body = [ResourceCategory]),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    )
)]
#[get("/api/resource-categories")]
pub async fn get_resource_categories_handler(
    _admin: AdminAccess,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resource_category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => {
            error!("Failed to list resource categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
