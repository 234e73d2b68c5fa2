use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::profile::adapter::incoming::web::routes::UserDetailRequest;
use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateUserDetailError, UserDetailCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/user-details",
    tag = "profile",
    request_body = UserDetailRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Profile created", body = inline(SuccessResponse<UserDetail>)),
        (status = 400, description = "Validation error or profile already exists", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
    )
)]
#[post("/api/user-details")]
pub async fn create_user_detail_handler(
    _admin: AdminAccess,
    req: web::Json<UserDetailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UserDetailCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.profile.create_user_detail.execute(command).await {
        Ok(detail) => ApiResponse::created(detail),
        Err(err) => map_create_user_detail_error(err),
    }
}

fn map_create_user_detail_error(err: CreateUserDetailError) -> HttpResponse {
    match err {
        CreateUserDetailError::AlreadyExists => {
            warn!("Rejected second profile creation");
            ApiResponse::bad_request(
                "PROFILE_ALREADY_EXISTS",
                "User details already exist, update them instead",
            )
        }
        CreateUserDetailError::RepositoryError(e) => {
            error!("Repository error creating user details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
