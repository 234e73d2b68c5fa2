use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::application::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "Experiences, latest start date first", body = [Experience]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse),
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => {
            error!("Failed to list experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}
