//! REST Request/Response Types
//!
//! Wire shapes for the four routes. Field names follow the web
//! client's contract (camelCase query params, `user` envelope on
//! /auth/me).

use leadboard_core::domain::UserProfile;
use serde::{Deserialize, Serialize};

/// POST /auth/signup body
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /auth/signin body
#[derive(Debug, Clone, Deserialize)]
pub struct SignInBody {
    pub email: String,
    pub password: String,
}

/// GET /chart/data query string
///
/// Both bounds are optional and inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartParams {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// GET /auth/me response
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}
