//! SDK Request/Response Types
//!
//! Client-side mirrors of the REST contract. The SDK deliberately does
//! not depend on the server crates, so these stand alone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user as the API returns it (no credential material)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Avatar badge text: the first two characters of the name,
    /// uppercased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Request to create an account
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to sign in to an existing account
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub access_token: String,
}

/// GET /auth/me envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MeResponse {
    pub user: UserProfile,
}

/// One day of lead generation counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub people: i64,
    pub companies: i64,
}

/// GET /chart/data envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChartDataResponse {
    #[allow(dead_code)]
    pub success: bool,
    pub data: Vec<ChartPoint>,
    #[allow(dead_code)]
    pub total: usize,
}

/// Error envelope shared by every failing response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireError {
    #[serde(rename = "statusCode")]
    #[allow(dead_code)]
    pub status_code: u16,
    pub message: String,
}
