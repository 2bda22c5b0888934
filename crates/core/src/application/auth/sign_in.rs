// Sign-In Use Case

use serde::{Deserialize, Serialize};

use crate::domain::user::validate_email;
use crate::error::{AppError, Result};
use crate::port::{PasswordHasher, TokenSigner, UserRepository};

use super::{issue_session, AuthSession, INVALID_CREDENTIALS_MESSAGE};

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

pub(super) fn validate_request(req: &SignInRequest) -> Result<()> {
    validate_email(&req.email)?;
    if req.password.is_empty() {
        return Err(AppError::Validation(
            "password must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Execute sign-in. Unknown email and wrong password take the same
/// error path.
pub async fn execute(
    users: &dyn UserRepository,
    hasher: &dyn PasswordHasher,
    signer: &dyn TokenSigner,
    req: SignInRequest,
) -> Result<AuthSession> {
    validate_request(&req)?;

    let Some(user) = users.find_by_email(&req.email).await? else {
        return Err(AppError::Unauthorized(
            INVALID_CREDENTIALS_MESSAGE.to_string(),
        ));
    };

    if !hasher.verify(&req.password, &user.password_hash).await? {
        return Err(AppError::Unauthorized(
            INVALID_CREDENTIALS_MESSAGE.to_string(),
        ));
    }

    tracing::debug!(user_id = user.id, "sign-in succeeded");

    issue_session(signer, &user)
}
