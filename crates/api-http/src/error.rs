//! HTTP Error Types
//!
//! Maps application errors to HTTP statuses and renders the JSON error
//! envelope `{statusCode, message, timestamp, path}` used by every
//! failing response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use leadboard_core::error::AppError;
use serde::Serialize;
use tracing::error;

/// Wire shape of every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub timestamp: String,
    pub path: String,
}

/// An application error bound to the request path that raised it
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    /// Map an application error onto its HTTP status.
    pub fn new(err: AppError, path: &str) -> Self {
        let (status, message) = status_and_message(err);
        Self {
            status,
            message,
            path: path.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            path: path.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>, path: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
            path: path.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convert AppError to HTTP status + client-facing message.
///
/// Internal failures keep their detail in the log; the client only ever
/// sees a generic message for those.
fn status_and_message(err: AppError) -> (StatusCode, String) {
    match err {
        AppError::Domain(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        err @ (AppError::Database(_)
        | AppError::Io(_)
        | AppError::Serialization(_)
        | AppError::Config(_)
        | AppError::Internal(_)) => {
            error!(detail = %err, "Request failed with internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message,
            // Millisecond precision with a Z suffix, same shape the web
            // client already parses
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: self.path,
        };

        (self.status, Json(body)).into_response()
    }
}
