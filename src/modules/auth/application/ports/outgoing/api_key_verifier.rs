/// Checks the key presented by an admin client.
pub trait ApiKeyVerifier: Send + Sync {
    fn verify(&self, presented: &str) -> bool;
}
