// Port Layer - Interfaces for external dependencies

pub mod chart_repository;
pub mod password_hasher;
pub mod time_provider;
pub mod token_signer;
pub mod user_repository;

// Re-exports
pub use chart_repository::ChartRepository;
pub use password_hasher::PasswordHasher;
pub use time_provider::TimeProvider;
pub use token_signer::{SessionClaims, TokenSigner};
pub use user_repository::UserRepository;
