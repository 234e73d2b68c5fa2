use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skill-categories",
    tag = "skill-categories",
    responses(
        (status = 200, description = "Categories by order, each with its skills", body = [SkillCategory]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skill-categories")]
pub async fn get_skill_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill_category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => {
            error!("Failed to list skill categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
