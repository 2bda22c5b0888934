// Current-User Use Case (session token -> profile)

use crate::domain::UserProfile;
use crate::error::{AppError, Result};
use crate::port::{TokenSigner, UserRepository};

use super::USER_NOT_FOUND_MESSAGE;

/// Resolve a bearer token to the profile of the user it was issued to.
///
/// A token that verifies but names a user who has since been removed is
/// still unauthorized, not a 404: the caller holds no valid session.
pub async fn execute(
    users: &dyn UserRepository,
    signer: &dyn TokenSigner,
    token: &str,
) -> Result<UserProfile> {
    let claims = signer.verify(token)?;

    let Some(user) = users.find_by_id(claims.sub).await? else {
        return Err(AppError::Unauthorized(USER_NOT_FOUND_MESSAGE.to_string()));
    };

    Ok(user.profile())
}
