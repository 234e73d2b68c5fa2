use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::GetSkillCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skill-categories/{slug}",
    tag = "skill-categories",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with its skills", body = inline(SuccessResponse<SkillCategory>)),
        (status = 404, description = "No category with this slug", body = ErrorResponse),
    )
)]
#[get("/api/skill-categories/{slug}")]
pub async fn get_skill_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.skill_category.get_single.execute(&slug).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetSkillCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("SKILL_CATEGORY_NOT_FOUND", "Skill category not found")
        }
        Err(GetSkillCategoryError::QueryError(e)) => {
            error!(slug = %slug, "Failed to load skill category: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::skill_category::application::ports::incoming::use_cases::GetSkillCategoryUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MissingCategory;

    #[async_trait]
    impl GetSkillCategoryUseCase for MissingCategory {
        async fn execute(&self, _slug: &str) -> Result<SkillCategory, GetSkillCategoryError> {
            Err(GetSkillCategoryError::CategoryNotFound)
        }
    }

    #[actix_web::test]
    async fn test_get_skill_category_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_skill_category(MissingCategory)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_skill_category_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/skill-categories/design")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
