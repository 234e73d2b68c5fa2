use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::StaticApiKeyVerifier;
use crate::auth::application::ports::outgoing::ApiKeyVerifier;

pub const TEST_API_KEY: &str = "test-admin-key";

/// Verifier registered the same way `main` registers it.
pub fn api_key_verifier() -> web::Data<Arc<dyn ApiKeyVerifier + Send + Sync>> {
    let verifier: Arc<dyn ApiKeyVerifier + Send + Sync> =
        Arc::new(StaticApiKeyVerifier::new(TEST_API_KEY));
    web::Data::new(verifier)
}
