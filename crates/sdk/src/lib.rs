//! Leadboard SDK - Rust Client Library
//!
//! Provides a typed client for the Leadboard REST API: account
//! creation, sign-in, profile lookup and chart data.
//!
//! # Example
//!
//! ```no_run
//! use leadboard_sdk::{ApiClient, SignUpRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to the server
//!     let mut client = ApiClient::new("http://127.0.0.1:3000")?;
//!
//!     // Create an account; the response carries a session token
//!     let session = client
//!         .sign_up(SignUpRequest {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!             password: "password123".to_string(),
//!         })
//!         .await?;
//!     client.set_token(session.access_token);
//!
//!     // Protected calls use the attached token
//!     let points = client.chart_data(None, None).await?;
//!     println!("{} chart points", points.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{Result, SdkError};
pub use types::{AuthResponse, ChartPoint, SignInRequest, SignUpRequest, UserProfile};
