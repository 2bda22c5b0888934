//! Leadboard Server - Main Entry Point
//!
//! Composition root: wires the SQLite and credential adapters into the
//! auth and chart services, then serves the REST API.

mod config;
mod seed;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::ServerConfig;
use leadboard_api_http::{HttpServer, HttpServerConfig};
use leadboard_core::application::{AuthService, ChartService};
use leadboard_core::port::time_provider::SystemTimeProvider;
use leadboard_infra_auth::{BcryptPasswordHasher, JwtTokenSigner};
use leadboard_infra_sqlite::{
    create_pool, run_migrations, SqliteChartRepository, SqliteUserRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("LEADBOARD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("leadboard=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Leadboard server v{} starting...", VERSION);

    // 2. Load configuration
    let config = ServerConfig::from_env();

    info!(db_path = %config.db_path, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool(&config.db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let users = Arc::new(SqliteUserRepository::new(pool.clone()));
    let charts = Arc::new(SqliteChartRepository::new(pool.clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new());
    let signer = Arc::new(JwtTokenSigner::with_ttl(
        &config.jwt_secret,
        config.token_ttl_secs,
    ));

    // 5. Seed demo data (opt-in)
    if config.seed_demo_data {
        info!("Seeding demo data...");
        seed::seed_demo_data(
            users.as_ref(),
            charts.as_ref(),
            hasher.as_ref(),
            time_provider.as_ref(),
        )
        .await
        .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;
    }

    // 6. Build services
    let auth = Arc::new(AuthService::new(users, hasher, signer, time_provider));
    let chart = Arc::new(ChartService::new(charts));

    // 7. Start HTTP server
    let http_config = HttpServerConfig {
        host: config.http_host.clone(),
        port: config.http_port,
        cors_origins: config.cors_origins.clone(),
    };

    info!(
        host = %config.http_host,
        port = config.http_port,
        "Starting HTTP server..."
    );

    HttpServer::new(http_config, auth, chart)
        .start(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;

    info!("Shutdown complete.");

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM so container stops drain cleanly.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Exiting gracefully...");
}
