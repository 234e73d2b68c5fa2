use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::profile::application::domain::entities::UserDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Returns the profile, or `null` data before one is created.
#[utoipa::path(
    get,
    path = "/api/user-details",
    tag = "profile",
    responses(
        (status = 200, description = "The profile, or null when none exists", body = UserDetail),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/user-details")]
pub async fn get_user_detail_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_user_detail.execute().await {
        Ok(detail) => ApiResponse::success(detail),
        Err(e) => {
            error!("Failed to load user details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
