use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::profile::application::domain::entities::SocialLink;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/user-social-links",
    tag = "profile",
    responses(
        (status = 200, description = "Social links by order", body = [SocialLink]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/user-social-links")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_social_links.execute().await {
        Ok(links) => ApiResponse::success(links),
        Err(e) => {
            error!("Failed to list social links: {}", e);
            ApiResponse::internal_error()
        }
    }
}
