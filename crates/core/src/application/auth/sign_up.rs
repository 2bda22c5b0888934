// Sign-Up Use Case

use serde::{Deserialize, Serialize};

use crate::domain::user::validate_email;
use crate::domain::NewUser;
use crate::error::{AppError, Result};
use crate::port::{PasswordHasher, TimeProvider, TokenSigner, UserRepository};

use super::{issue_session, AuthSession, DUPLICATE_EMAIL_MESSAGE};

/// Minimum accepted password length (server-side rule; clients may
/// enforce a stricter one)
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(super) fn validate_request(req: &SignUpRequest) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    validate_email(&req.email)?;
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Execute sign-up: validate, reject duplicates, hash, persist, and
/// open a session.
///
/// The duplicate check races with concurrent sign-ups; the repository
/// maps the unique-constraint violation to the same conflict error, so
/// both paths surface identically.
pub async fn execute(
    users: &dyn UserRepository,
    hasher: &dyn PasswordHasher,
    signer: &dyn TokenSigner,
    time: &dyn TimeProvider,
    req: SignUpRequest,
) -> Result<AuthSession> {
    validate_request(&req)?;

    if users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
    }

    let password_hash = hasher.hash(&req.password).await?;

    let now = time.now_utc();
    let user = users
        .insert(NewUser {
            name: req.name,
            email: req.email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(user_id = user.id, "account created");

    issue_session(signer, &user)
}
