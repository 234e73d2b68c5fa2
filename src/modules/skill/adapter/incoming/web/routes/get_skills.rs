use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::skill::application::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "Skills by order, each with its category", body = [Skill]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::skill::application::ports::incoming::use_cases::{
        GetSkillsError, GetSkillsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_skill;

    struct MockGetSkillsUseCase;

    #[async_trait]
    impl GetSkillsUseCase for MockGetSkillsUseCase {
        async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
            Ok(vec![sample_skill()])
        }
    }

    #[actix_web::test]
    async fn test_list_skills_is_public() {
        let app_state = TestAppStateBuilder::default()
            .with_get_skills(MockGetSkillsUseCase)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], "rust");
        assert_eq!(body["data"][0]["category"]["name"], "Backend");
    }
}
