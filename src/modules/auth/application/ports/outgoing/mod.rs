mod api_key_verifier;

pub use api_key_verifier::ApiKeyVerifier;
