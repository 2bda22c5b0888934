// Application Layer - Use Cases and Business Logic

pub mod auth;
pub mod chart;

// Re-exports
pub use auth::{AuthService, AuthSession};
pub use chart::{ChartData, ChartQuery, ChartService};
