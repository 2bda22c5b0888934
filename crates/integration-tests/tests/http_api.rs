//! Full-stack HTTP tests: the axum app bound on an ephemeral port,
//! driven through the SDK and, for wire-level assertions, raw reqwest.

use std::sync::Arc;

use chrono::NaiveDate;
use leadboard_api_http::{router, AppState};
use leadboard_core::application::auth::DUPLICATE_EMAIL_MESSAGE;
use leadboard_core::application::{AuthService, ChartService};
use leadboard_core::domain::ChartPoint;
use leadboard_core::port::time_provider::SystemTimeProvider;
use leadboard_core::port::ChartRepository;
use leadboard_infra_auth::{BcryptPasswordHasher, JwtTokenSigner};
use leadboard_infra_sqlite::{
    create_pool, run_migrations, SqliteChartRepository, SqliteUserRepository,
};
use leadboard_sdk::{ApiClient, SdkError, SignInRequest, SignUpRequest};
use tempfile::TempDir;

struct TestServer {
    base_url: String,
    charts: Arc<SqliteChartRepository>,
    _dir: TempDir,
}

/// Bind the full application on an ephemeral port.
async fn spawn_server() -> TestServer {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("leadboard.db");

    let pool = create_pool(db_path.to_str().unwrap()).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let charts = Arc::new(SqliteChartRepository::new(pool.clone()));
    let auth = Arc::new(AuthService::new(
        Arc::new(SqliteUserRepository::new(pool)),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        Arc::new(JwtTokenSigner::new("e2e-test-secret")),
        Arc::new(SystemTimeProvider),
    ));
    let chart = Arc::new(ChartService::new(charts.clone()));

    let app = router(
        AppState { auth, chart },
        vec![
            "http://localhost:5173".to_string(),
            "*.vercel.app".to_string(),
        ],
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        charts,
        _dir: dir,
    }
}

fn sign_up_request(name: &str, email: &str) -> SignUpRequest {
    SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn sign_up_me_and_sign_in_over_http() {
    let server = spawn_server().await;
    let mut client = ApiClient::new(&server.base_url).unwrap();

    let created = client
        .sign_up(sign_up_request("Alice", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(created.user.email, "alice@example.com");

    client.set_token(created.access_token);
    let me = client.me().await.unwrap();
    assert_eq!(me.id, created.user.id);
    assert_eq!(me.name, "Alice");

    let session = client
        .sign_in(SignInRequest {
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();
    assert!(!session.access_token.is_empty());
}

#[tokio::test]
async fn signup_returns_201_and_the_session_body() {
    let server = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/auth/signup", server.base_url))
        .json(&serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["access_token"].is_string());
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"]["createdat"].is_string());
}

#[tokio::test]
async fn duplicate_email_maps_to_409_over_the_wire() {
    let server = spawn_server().await;
    let client = ApiClient::new(&server.base_url).unwrap();

    client
        .sign_up(sign_up_request("Alice", "alice@example.com"))
        .await
        .unwrap();

    let err = client
        .sign_up(sign_up_request("Alice Again", "alice@example.com"))
        .await
        .unwrap_err();

    match err {
        SdkError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, DUPLICATE_EMAIL_MESSAGE);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn chart_data_round_trips_with_bounds() {
    let server = spawn_server().await;

    for (day, people, companies) in [
        ("2024-01-01", 10, 2),
        ("2024-01-02", 20, 4),
        ("2024-01-03", 30, 6),
    ] {
        server
            .charts
            .insert(&ChartPoint {
                date: date(day),
                people,
                companies,
            })
            .await
            .unwrap();
    }

    let mut client = ApiClient::new(&server.base_url).unwrap();
    let session = client
        .sign_up(sign_up_request("Alice", "alice@example.com"))
        .await
        .unwrap();
    client.set_token(session.access_token);

    let points = client
        .chart_data(Some(date("2024-01-02")), Some(date("2024-01-03")))
        .await
        .unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date("2024-01-02"));
    assert_eq!(points[1].people, 30);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bogus_tokens() {
    let server = spawn_server().await;

    // No Authorization header at all
    let response = reqwest::Client::new()
        .get(format!("{}/chart/data", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["path"], "/chart/data");

    // A token that never verifies
    let client = ApiClient::with_token(&server.base_url, "bogus").unwrap();
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, SdkError::Unauthorized(_)));
}

#[tokio::test]
async fn error_envelope_carries_exactly_four_fields() {
    let server = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{}/auth/signup", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    let object = body.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].is_string());
    assert_eq!(body["path"], "/auth/signup");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn malformed_date_params_are_400_with_the_field_name() {
    let server = spawn_server().await;

    let mut client = ApiClient::new(&server.base_url).unwrap();
    let session = client
        .sign_up(sign_up_request("Alice", "alice@example.com"))
        .await
        .unwrap();
    client.set_token(session.access_token.clone());

    let response = reqwest::Client::new()
        .get(format!(
            "{}/chart/data?startDate=01/05/2024",
            server.base_url
        ))
        .bearer_auth(&session.access_token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid startDate format");
    assert_eq!(body["path"], "/chart/data");
}

#[tokio::test]
async fn cors_preflight_honors_the_allow_list() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    // Exact entry
    let allowed = http
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/auth/signin", server.base_url),
        )
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    // Wildcard suffix entry
    let preview = http
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/auth/signin", server.base_url),
        )
        .header("Origin", "https://leadboard-preview.vercel.app")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(
        preview
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://leadboard-preview.vercel.app")
    );

    // Unknown origin gets no allow header
    let denied = http
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/auth/signin", server.base_url),
        )
        .header("Origin", "https://evil.example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
