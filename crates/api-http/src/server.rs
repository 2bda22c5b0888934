//! HTTP Server
//!
//! Assembles the router and serves it over TCP with graceful shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use leadboard_core::application::{AuthService, ChartService};
use leadboard_core::error::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::cors::cors_layer;
use crate::handler;
use crate::middleware::request_logging;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 3000;

/// HTTP Server Configuration
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Exact origins plus `*.suffix` wildcard entries
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

/// Handler dependencies, cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub chart: Arc<ChartService>,
}

/// Build the application router: four routes, request logging, CORS.
///
/// Split out from [`HttpServer`] so tests can bind it on an ephemeral
/// port.
pub fn router(state: AppState, cors_origins: Vec<String>) -> Router {
    Router::new()
        .route("/auth/signup", post(handler::sign_up))
        .route("/auth/signin", post(handler::sign_in))
        .route("/auth/me", get(handler::me))
        .route("/chart/data", get(handler::chart_data))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, auth: Arc<AuthService>, chart: Arc<ChartService>) -> Self {
        Self {
            config,
            state: AppState { auth, chart },
        }
    }

    /// Bind and serve until `shutdown` resolves, then drain in-flight
    /// requests.
    pub async fn start<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let app = router(self.state, self.config.cors_origins);

        let listener = TcpListener::bind(&addr).await?;
        info!(addr = %addr, "HTTP server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
