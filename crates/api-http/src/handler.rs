//! Route Handlers
//!
//! Thin pass-throughs: decode the wire shape, call the service, map
//! failures into the shared error envelope.

use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::Json;
use leadboard_core::application::auth::{SignInRequest, SignUpRequest};
use leadboard_core::application::chart::ChartQuery;
use leadboard_core::application::{AuthSession, ChartData};

use crate::error::ApiError;
use crate::extract::{ApiJson, AuthUser};
use crate::server::AppState;
use crate::types::{ChartParams, MeResponse, SignInBody, SignUpBody};

/// POST /auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(body): ApiJson<SignUpBody>,
) -> Result<(StatusCode, Json<AuthSession>), ApiError> {
    let req = SignUpRequest {
        name: body.name,
        email: body.email,
        password: body.password,
    };

    let session = state
        .auth
        .sign_up(req)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(body): ApiJson<SignInBody>,
) -> Result<Json<AuthSession>, ApiError> {
    let req = SignInRequest {
        email: body.email,
        password: body.password,
    };

    let session = state
        .auth
        .sign_in(req)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    Ok(Json(session))
}

/// GET /auth/me
///
/// The guard does all the work; the handler only wraps the profile in
/// the `user` envelope the web client expects.
pub async fn me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse { user })
}

/// GET /chart/data
pub async fn chart_data(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    AuthUser(_user): AuthUser,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartData>, ApiError> {
    let query = ChartQuery {
        start_date: params.start_date,
        end_date: params.end_date,
    };

    let data = state
        .chart
        .chart_data(query)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    Ok(Json(data))
}
