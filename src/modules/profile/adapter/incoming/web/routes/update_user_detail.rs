use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::modules::profile::adapter::incoming::web::routes::UserDetailRequest;
use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateUserDetailError, UserDetailCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/user-details",
    tag = "profile",
    request_body = UserDetailRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Profile replaced", body = inline(SuccessResponse<UserDetail>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse),
        (status = 404, description = "No profile exists yet", body = ErrorResponse),
    )
)]
#[put("/api/user-details")]
pub async fn update_user_detail_handler(
    _admin: AdminAccess,
    req: web::Json<UserDetailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UserDetailCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_failed(&err),
    };

    match data.profile.update_user_detail.execute(command).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(err) => map_update_user_detail_error(err),
    }
}

fn map_update_user_detail_error(err: UpdateUserDetailError) -> HttpResponse {
    match err {
        UpdateUserDetailError::NotFound => {
            ApiResponse::not_found("USER_DETAIL_NOT_FOUND", "User details not found")
        }
        UpdateUserDetailError::RepositoryError(e) => {
            error!("Repository error updating user details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
