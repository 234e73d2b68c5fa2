use sha2::{Digest, Sha256};

use crate::auth::application::ports::outgoing::ApiKeyVerifier;

/// Verifies against the single key from configuration.
///
/// Both sides are hashed first so the comparison always walks 32 bytes,
/// whatever prefix the presented key shares with the real one.
#[derive(Clone)]
pub struct StaticApiKeyVerifier {
    expected_digest: [u8; 32],
}

impl StaticApiKeyVerifier {
    pub fn new(admin_api_key: &str) -> Self {
        Self {
            expected_digest: digest(admin_api_key),
        }
    }
}

impl ApiKeyVerifier for StaticApiKeyVerifier {
    fn verify(&self, presented: &str) -> bool {
        if presented.is_empty() {
            return false;
        }

        let presented_digest = digest(presented);
        let diff = self
            .expected_digest
            .iter()
            .zip(presented_digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        diff == 0
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
