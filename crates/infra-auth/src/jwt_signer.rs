// JWT session token signer

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use leadboard_core::error::{AppError, Result};
use leadboard_core::port::{SessionClaims, TokenSigner};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default session lifetime: 24 hours
pub const DEFAULT_TTL_SECS: i64 = 86_400;

/// Claims as encoded on the wire: the domain claims plus the registered
/// time claims this signer owns.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: i64,
    email: String,
    name: String,
    iat: i64,
    exp: i64,
}

/// HS256 token signer over a shared secret.
pub struct JwtTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenSigner {
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, DEFAULT_TTL_SECS)
    }

    pub fn with_ttl(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            // HS256 with exp required; default 60s clock-skew leeway
            validation: Validation::default(),
            ttl_secs,
        }
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, claims: &SessionClaims) -> Result<String> {
        let iat = chrono::Utc::now().timestamp();
        let wire = WireClaims {
            sub: claims.sub,
            email: claims.email.clone(),
            name: claims.name.clone(),
            iat,
            exp: iat + self.ttl_secs,
        };

        encode(&Header::default(), &wire, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims> {
        let data = decode::<WireClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                debug!(reason = %e, "session token rejected");
                AppError::Unauthorized("Invalid or expired session token".to_string())
            },
        )?;

        Ok(SessionClaims {
            sub: data.claims.sub,
            email: data.claims.email,
            name: data.claims.name,
        })
    }
}
