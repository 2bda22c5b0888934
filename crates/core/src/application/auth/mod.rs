// Auth Service - Sign-up, sign-in and session verification use cases

pub mod current_user;
pub mod sign_in;
pub mod sign_up;


pub use sign_in::SignInRequest;
pub use sign_up::SignUpRequest;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserProfile};
use crate::error::Result;
use crate::port::{PasswordHasher, SessionClaims, TimeProvider, TokenSigner, UserRepository};

/// Message for a duplicate email at sign-up (HTTP 409).
pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists. Please try signing in or use a different email address.";

/// Message for a failed sign-in, identical for unknown email and wrong
/// password so accounts cannot be enumerated (HTTP 401).
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid email or password. Please check your credentials and try again.";

/// Message for a valid token whose user no longer exists (HTTP 401).
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Result of a successful sign-up or sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserProfile,
    pub access_token: String,
}

/// Auth Service
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    signer: Arc<dyn TokenSigner>,
    time: Arc<dyn TimeProvider>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        signer: Arc<dyn TokenSigner>,
        time: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            users,
            hasher,
            signer,
            time,
        }
    }

    /// Register a new account and open a session
    pub async fn sign_up(&self, req: SignUpRequest) -> Result<AuthSession> {
        sign_up::execute(
            self.users.as_ref(),
            self.hasher.as_ref(),
            self.signer.as_ref(),
            self.time.as_ref(),
            req,
        )
        .await
    }

    /// Authenticate an existing account and open a session
    pub async fn sign_in(&self, req: SignInRequest) -> Result<AuthSession> {
        sign_in::execute(
            self.users.as_ref(),
            self.hasher.as_ref(),
            self.signer.as_ref(),
            req,
        )
        .await
    }

    /// Resolve a session token to the user it belongs to
    pub async fn current_user(&self, token: &str) -> Result<UserProfile> {
        current_user::execute(self.users.as_ref(), self.signer.as_ref(), token).await
    }
}

/// Issue a session token for `user` and pair it with the wire-safe
/// profile.
fn issue_session(signer: &dyn TokenSigner, user: &User) -> Result<AuthSession> {
    let claims = SessionClaims {
        sub: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
    };
    let access_token = signer.sign(&claims)?;
    Ok(AuthSession {
        user: user.profile(),
        access_token,
    })
}
