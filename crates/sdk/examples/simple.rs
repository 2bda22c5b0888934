//! Simple SDK Example
//!
//! Demonstrates basic usage of the Leadboard SDK.
//!
//! # Usage
//!
//! 1. Start the server (with demo data):
//!    ```bash
//!    LEADBOARD_SEED=1 cargo run --package leadboard-server
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --example simple
//!    ```

use chrono::{Duration, Utc};
use leadboard_sdk::{ApiClient, SdkError, SignInRequest, SignUpRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Leadboard SDK - Simple Example");
    println!("==============================\n");

    let mut client = ApiClient::new("http://127.0.0.1:3000")?;

    // 1. Create an account (fall back to sign-in if it already exists)
    println!("1. Creating account...");
    let session = match client
        .sign_up(SignUpRequest {
            name: "Example".to_string(),
            email: "example@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
    {
        Ok(session) => {
            println!("   ✓ Account created\n");
            session
        }
        Err(SdkError::Api { status: 409, .. }) => {
            println!("   ⚠ Account exists, signing in instead\n");
            client
                .sign_in(SignInRequest {
                    email: "example@example.com".to_string(),
                    password: "password123".to_string(),
                })
                .await?
        }
        Err(err) => return Err(err.into()),
    };

    client.set_token(session.access_token);

    // 2. Fetch the profile
    println!("2. Fetching profile...");
    let me = client.me().await?;
    println!("   ✓ Signed in as {} <{}>\n", me.name, me.email);

    // 3. Fetch the last seven days of chart data
    println!("3. Fetching chart data (last 7 days)...");
    let today = Utc::now().date_naive();
    let points = client
        .chart_data(Some(today - Duration::days(6)), Some(today))
        .await?;

    println!("   ✓ {} points:", points.len());
    for point in &points {
        println!(
            "     {}  people: {:>3}  companies: {:>3}",
            point.date, point.people, point.companies
        );
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
