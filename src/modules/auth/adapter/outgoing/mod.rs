mod static_api_key_verifier;

pub use static_api_key_verifier::StaticApiKeyVerifier;
