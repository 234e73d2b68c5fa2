use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::ApiKeyVerifier;
use crate::shared::api::ApiResponse;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried a valid admin API key.
///
/// Taking it as a handler argument gates the route.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn ApiKeyVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("API key verifier is not registered");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let presented = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if verifier.verify(presented) {
            ready(Ok(AdminAccess))
        } else {
            tracing::warn!(path = %req.path(), method = %req.method(), "Rejected admin request");
            ready(Err(create_api_error(ApiResponse::unauthorized(
                "UNAUTHORIZED",
                "Unauthorized",
            ))))
        }
    }
}
