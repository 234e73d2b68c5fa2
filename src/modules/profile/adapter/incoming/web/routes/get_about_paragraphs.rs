use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::profile::application::domain::entities::AboutParagraph;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/about-me",
    tag = "profile",
    responses(
        (status = 200, description = "About paragraphs by order", body = [AboutParagraph]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/about-me")]
pub async fn get_about_paragraphs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_about_paragraphs.execute().await {
        Ok(paragraphs) => ApiResponse::success(paragraphs),
        Err(e) => {
            error!("Failed to list about paragraphs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
