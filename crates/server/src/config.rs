// Server Configuration
//
// Every knob is an environment variable so the binary runs unchanged
// in a container, a PaaS dyno or a developer shell.

use tracing::warn;

const DEFAULT_DB_PATH: &str = "~/.leadboard/leadboard.db";
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

// Fallback for local development only. Anything production-like must
// set LEADBOARD_JWT_SECRET.
const DEV_JWT_SECRET: &str = "leadboard-dev-secret-change-me";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db_path: String,
    pub http_host: String,
    pub http_port: u16,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub cors_origins: Vec<String>,
    pub seed_demo_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let db_path = std::env::var("LEADBOARD_DB_PATH")
            .unwrap_or_else(|_| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

        let http_host =
            std::env::var("LEADBOARD_HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());

        // PORT is the PaaS convention; the LEADBOARD_ variable wins
        let http_port: u16 = std::env::var("LEADBOARD_HTTP_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let jwt_secret = match std::env::var("LEADBOARD_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("LEADBOARD_JWT_SECRET not set, using the development fallback");
                DEV_JWT_SECRET.to_string()
            }
        };

        let token_ttl_secs: i64 = std::env::var("LEADBOARD_TOKEN_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let cors_origins = std::env::var("LEADBOARD_CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| default_origins());

        let seed_demo_data = std::env::var("LEADBOARD_SEED")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            db_path,
            http_host,
            http_port,
            jwt_secret,
            token_ttl_secs,
            cors_origins,
            seed_demo_data,
        }
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Local dev frontends plus preview deployments.
fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "*.vercel.app".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_is_comma_separated_and_trimmed() {
        let origins = parse_origins("http://localhost:5173, https://app.example.com ,,");

        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn default_origins_cover_dev_and_previews() {
        let origins = default_origins();

        assert!(origins.contains(&"http://localhost:5173".to_string()));
        assert!(origins.iter().any(|entry| entry.starts_with("*.")));
    }
}
