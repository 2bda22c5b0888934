// Session Token Port (Interface)

use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::error::Result;

/// Claims carried by a session token. Issue and expiry times are the
/// signer's concern, not part of the domain view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user id
    pub sub: UserId,
    pub email: String,
    pub name: String,
}

/// Signs and verifies session tokens.
pub trait TokenSigner: Send + Sync {
    /// Sign claims into a compact token string
    fn sign(&self, claims: &SessionClaims) -> Result<String>;

    /// Verify a token and return its claims. Bad signatures and expired
    /// tokens come back as `AppError::Unauthorized`.
    fn verify(&self, token: &str) -> Result<SessionClaims>;
}
