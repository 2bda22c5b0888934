// Bcrypt password hasher

use async_trait::async_trait;
use leadboard_core::error::{AppError, Result};
use leadboard_core::port::PasswordHasher;

/// Production work factor
const DEFAULT_COST: u32 = 10;

/// Password hasher backed by bcrypt.
///
/// Hashing at production cost takes tens of milliseconds of pure CPU,
/// so both operations run under `spawn_blocking`.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Override the work factor. Tests use the bcrypt minimum (4) to
    /// stay fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String> {
        let cost = self.cost;
        let password = password.to_string();

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("hash task failed: {e}")))?
            .map_err(|e| AppError::Internal(format!("bcrypt hash failed: {e}")))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        // A stored hash bcrypt cannot parse simply fails verification
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("verify task failed: {e}")))?
            .unwrap_or(false);

        Ok(matches)
    }
}
