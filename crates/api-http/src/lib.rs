//! REST API Layer
//!
//! axum routes over the auth and chart services: bearer-token guard,
//! request logging, CORS and a single JSON error envelope shared by
//! every failure path.

pub mod cors;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod server;
pub mod types;

pub use server::{router, AppState, HttpServer, HttpServerConfig};
