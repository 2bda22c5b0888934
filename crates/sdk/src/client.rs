//! Leadboard Client Implementation

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Result, SdkError};
use crate::types::{
    AuthResponse, ChartDataResponse, ChartPoint, MeResponse, SignInRequest, SignUpRequest,
    UserProfile, WireError,
};
use chrono::NaiveDate;

/// Default request timeout, matching the web client's axios setup
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Leadboard API Client
///
/// Typed access to the REST API. Protected calls need a session token,
/// obtained from [`sign_up`](ApiClient::sign_up) or
/// [`sign_in`](ApiClient::sign_in) and attached with
/// [`set_token`](ApiClient::set_token).
///
/// # Example
///
/// ```no_run
/// use leadboard_sdk::{ApiClient, SignInRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ApiClient::new("http://127.0.0.1:3000")?;
///
/// let session = client
///     .sign_in(SignInRequest {
///         email: "alice@example.com".to_string(),
///         password: "password123".to_string(),
///     })
///     .await?;
/// client.set_token(session.access_token);
///
/// let me = client.me().await?;
/// println!("Signed in as {}", me.name);
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g.
    /// `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Create a client with a session token already attached.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.set_token(token);
        Ok(client)
    }

    /// Attach a session token to subsequent protected calls.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the session token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Create an account. Returns the new profile and a session token.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use leadboard_sdk::{ApiClient, SignUpRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = ApiClient::new("http://127.0.0.1:3000")?;
    /// let session = client
    ///     .sign_up(SignUpRequest {
    ///         name: "Alice".to_string(),
    ///         email: "alice@example.com".to_string(),
    ///         password: "password123".to_string(),
    ///     })
    ///     .await?;
    ///
    /// println!("Welcome, {}", session.user.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/signup"))
            .json(&request)
            .send()
            .await?;

        decode(response).await
    }

    /// Sign in to an existing account.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/signin"))
            .json(&request)
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch the signed-in user's profile.
    pub async fn me(&self) -> Result<UserProfile> {
        let token = self.token.as_ref().ok_or(SdkError::MissingToken)?;

        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let body: MeResponse = decode(response).await?;
        Ok(body.user)
    }

    /// Fetch chart points, optionally bounded. Both bounds are
    /// inclusive; `None` leaves that side open.
    pub async fn chart_data(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ChartPoint>> {
        let token = self.token.as_ref().ok_or(SdkError::MissingToken)?;

        let mut request = self.http.get(self.url("/chart/data")).bearer_auth(token);

        if let Some(start) = start_date {
            request = request.query(&[("startDate", start.to_string())]);
        }
        if let Some(end) = end_date {
            request = request.query(&[("endDate", end.to_string())]);
        }

        let body: ChartDataResponse = decode(request.send().await?).await?;
        Ok(body.data)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a response: 2xx bodies parse into `T`, everything else comes
/// back as the server's error envelope.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(error_from_response(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

fn error_from_response(status: StatusCode, body: &str) -> SdkError {
    let message = serde_json::from_str::<WireError>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    if status == StatusCode::UNAUTHORIZED {
        SdkError::Unauthorized(message)
    } else {
        SdkError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_messages_are_extracted() {
        let body = r#"{"statusCode":409,"message":"Email taken","timestamp":"2024-01-01T00:00:00.000Z","path":"/auth/signup"}"#;

        let err = error_from_response(StatusCode::CONFLICT, body);
        match err {
            SdkError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email taken");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn unauthorized_gets_its_own_variant() {
        let body = r#"{"statusCode":401,"message":"Invalid or expired session token","timestamp":"2024-01-01T00:00:00.000Z","path":"/auth/me"}"#;

        let err = error_from_response(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, SdkError::Unauthorized(msg) if msg.contains("expired")));
    }

    #[test]
    fn non_envelope_bodies_fall_back_to_raw_text() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(
            err,
            SdkError::Api { status: 502, message } if message == "upstream down"
        ));
    }

    #[test]
    fn empty_bodies_fall_back_to_the_status_reason() {
        let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(
            err,
            SdkError::Api { status: 500, message } if message == "Internal Server Error"
        ));
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/auth/me"), "http://localhost:3000/auth/me");
    }
}
