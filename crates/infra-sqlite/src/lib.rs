// Leadboard Infrastructure - SQLite Adapter
// Implements: UserRepository, ChartRepository

mod chart_repository;
mod connection;
mod error;
mod migration;
mod user_repository;

pub use chart_repository::SqliteChartRepository;
pub use connection::create_pool;
pub use migration::run_migrations;
pub use user_repository::SqliteUserRepository;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
