// Password Hasher Port (Interface)

use crate::error::Result;
use async_trait::async_trait;

/// Credential hashing interface.
///
/// Hashing is deliberately slow; implementations are expected to move
/// the work off the async runtime (e.g. `spawn_blocking`).
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String>;

    /// Verify a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}
