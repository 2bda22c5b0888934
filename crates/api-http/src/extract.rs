//! Request Guards and Extractors
//!
//! `AuthUser` is the bearer-token guard for protected routes; `ApiJson`
//! wraps body deserialization so malformed JSON comes back in the
//! shared error envelope instead of axum's default rejection.

use axum::extract::{FromRef, FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use leadboard_core::domain::UserProfile;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::server::AppState;

pub const MISSING_BEARER_MESSAGE: &str = "Missing or malformed Authorization header";

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively; an empty token counts as
/// missing.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Verified session guard: rejects with 401 before the handler runs,
/// otherwise hands the handler the caller's profile.
pub struct AuthUser(pub UserProfile);

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        let state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| ApiError::unauthorized(MISSING_BEARER_MESSAGE, &path))?;

        let user = state
            .auth
            .current_user(token)
            .await
            .map_err(|err| ApiError::new(err, &path))?;

        Ok(AuthUser(user))
    }
}

/// JSON body extractor whose rejection is a 400 in the global envelope
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text(), &path)),
        }
    }
}
