// ApiClient behavior against a mocked Leadboard server.

use httpmock::prelude::*;
use leadboard_sdk::{ApiClient, SdkError, SignInRequest, SignUpRequest};

fn profile_json(id: i64, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": email,
        "createdat": "2024-01-01T00:00:00Z",
        "updatedat": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn sign_up_posts_the_body_and_decodes_the_session() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/signup")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "password123"
            }));
        then.status(201).json_body(serde_json::json!({
            "user": profile_json(1, "Alice", "alice@example.com"),
            "access_token": "jwt-token"
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let session = client
        .sign_up(SignUpRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(session.user.id, 1);
    assert_eq!(session.user.email, "alice@example.com");
    assert_eq!(session.access_token, "jwt-token");
}

#[tokio::test]
async fn sign_in_failure_surfaces_the_envelope_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/auth/signin");
        then.status(401).json_body(serde_json::json!({
            "statusCode": 401,
            "message": "Invalid email or password. Please check your credentials and try again.",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "path": "/auth/signin"
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let err = client
        .sign_in(SignInRequest {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Unauthorized(message) => {
            assert!(message.contains("Invalid email or password"))
        }
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn duplicate_email_is_an_api_error_with_status_409() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/auth/signup");
        then.status(409).json_body(serde_json::json!({
            "statusCode": 409,
            "message": "An account with this email already exists. Please try signing in or use a different email address.",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "path": "/auth/signup"
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let err = client
        .sign_up(SignUpRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        SdkError::Api { status, message } => {
            assert_eq!(status, 409);
            assert!(message.contains("already exists"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn me_sends_the_bearer_token_and_unwraps_the_user() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/me")
            .header("authorization", "Bearer jwt-token");
        then.status(200).json_body(serde_json::json!({
            "user": profile_json(7, "Bob", "bob@example.com")
        }));
    });

    let client = ApiClient::with_token(server.base_url(), "jwt-token").unwrap();
    let user = client.me().await.unwrap();

    mock.assert();
    assert_eq!(user.id, 7);
    assert_eq!(user.initials(), "BO");
}

#[tokio::test]
async fn protected_calls_without_a_token_fail_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(200).json_body(serde_json::json!({}));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let err = client.me().await.unwrap_err();

    assert!(matches!(err, SdkError::MissingToken));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn chart_data_passes_camel_case_query_params() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/chart/data")
            .query_param("startDate", "2024-01-01")
            .query_param("endDate", "2024-01-31")
            .header("authorization", "Bearer jwt-token");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "data": [
                { "date": "2024-01-01", "people": 12, "companies": 3 },
                { "date": "2024-01-02", "people": 18, "companies": 5 }
            ],
            "total": 2
        }));
    });

    let client = ApiClient::with_token(server.base_url(), "jwt-token").unwrap();
    let points = client
        .chart_data(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].people, 12);
    assert_eq!(points[1].companies, 5);
}

#[tokio::test]
async fn chart_data_omits_unset_bounds() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/chart/data");
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "data": [],
            "total": 0
        }));
    });

    let client = ApiClient::with_token(server.base_url(), "jwt-token").unwrap();
    let points = client.chart_data(None, None).await.unwrap();

    mock.assert();
    assert!(points.is_empty());
}

#[tokio::test]
async fn expired_sessions_are_unauthorized_errors() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/chart/data");
        then.status(401).json_body(serde_json::json!({
            "statusCode": 401,
            "message": "Invalid or expired session token",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "path": "/chart/data"
        }));
    });

    let client = ApiClient::with_token(server.base_url(), "stale").unwrap();
    let err = client.chart_data(None, None).await.unwrap_err();

    assert!(matches!(err, SdkError::Unauthorized(_)));
}
