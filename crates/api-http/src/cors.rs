//! CORS Policy
//!
//! Builds the CORS layer from a configured allow-list. Entries are
//! exact origins, except entries starting with `*.` which match any
//! origin whose host ends in that suffix (preview deployments get a
//! fresh subdomain per build).

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn cors_layer(origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .map(|origin| origin_allowed(&origins, origin))
                .unwrap_or(false)
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

/// Match an Origin header value against the allow-list.
fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| match entry.strip_prefix("*.") {
        // Suffix match requires a subdomain: `*.vercel.app` accepts
        // `https://app.vercel.app` but not `https://evil-vercel.app`
        Some(domain) => origin.ends_with(&format!(".{domain}")),
        None => entry == origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> Vec<String> {
        vec![
            "http://localhost:5173".to_string(),
            "*.vercel.app".to_string(),
        ]
    }

    #[test]
    fn exact_origin_matches() {
        assert!(origin_allowed(&allow_list(), "http://localhost:5173"));
    }

    #[test]
    fn unknown_origin_is_denied() {
        assert!(!origin_allowed(&allow_list(), "http://localhost:4000"));
        assert!(!origin_allowed(&allow_list(), "https://example.com"));
    }

    #[test]
    fn wildcard_matches_any_subdomain() {
        assert!(origin_allowed(&allow_list(), "https://leadboard.vercel.app"));
        assert!(origin_allowed(
            &allow_list(),
            "https://leadboard-git-main-user.vercel.app"
        ));
    }

    #[test]
    fn wildcard_requires_a_subdomain_boundary() {
        assert!(!origin_allowed(&allow_list(), "https://vercel.app"));
        assert!(!origin_allowed(&allow_list(), "https://evil-vercel.app"));
    }
}
