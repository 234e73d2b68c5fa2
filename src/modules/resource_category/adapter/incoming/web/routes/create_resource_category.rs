use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::resource_category::adapter::incoming::web::routes::ResourceCategoryRequest;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    CreateResourceCategoryError, ResourceCategoryCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/resource-categories",
    tag = "resource-categories",
    request_body = ResourceCategoryRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<ResourceCategory>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 409, description = "A category with this name exists", body = ErrorResponse),
    )
)]
#[post("/api/resource-categories")]
pub async fn create_resource_category_handler(
    _admin: AdminAccess,
    req: web::Json<ResourceCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ResourceCategoryCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.resource_category.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateResourceCategoryError) -> HttpResponse {
    match err {
        CreateResourceCategoryError::SlugAlreadyExists => {
            warn!("Duplicate resource category name");
            ApiResponse::conflict(
                "SLUG_ALREADY_EXISTS",
                "A resource category with this name already exists",
            )
        }
        CreateResourceCategoryError::RepositoryError(e) => {
            error!("Repository error creating resource category: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::resource_category::application::ports::incoming::use_cases::CreateResourceCategoryUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{api_key_verifier, TEST_API_KEY};
    use crate::tests::support::fixtures::sample_resource_category;

    struct MockCreateResourceCategoryUseCase {
        result: Result<ResourceCategory, CreateResourceCategoryError>,
    }

    #[async_trait]
    impl CreateResourceCategoryUseCase for MockCreateResourceCategoryUseCase {
        async fn execute(
            &self,
            _command: ResourceCategoryCommand,
        ) -> Result<ResourceCategory, CreateResourceCategoryError> {
            self.result.clone()
        }
    }

    async fn post(
        result: Result<ResourceCategory, CreateResourceCategoryError>,
        body: Value,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_create_resource_category(MockCreateResourceCategoryUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(api_key_verifier())
                .app_data(custom_json_config())
                .service(create_resource_category_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resource-categories")
            .insert_header(("x-api-key", TEST_API_KEY))
            .set_json(&body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_create_resource_category_success() {
        let resp = post(Ok(sample_resource_category()), json!({ "name": "Backend" })).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "backend");
        assert_eq!(body["data"]["order"], 0);
    }

    #[actix_web::test]
    async fn test_create_resource_category_requires_name() {
        let resp = post(Ok(sample_resource_category()), json!({ "name": " " })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_resource_category_conflict() {
        let resp = post(
            Err(CreateResourceCategoryError::SlugAlreadyExists),
            json!({ "name": "Backend" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_create_resource_category_wrong_order_type() {
        let resp = post(
            Ok(sample_resource_category()),
            json!({ "name": "Backend", "order": "first" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
