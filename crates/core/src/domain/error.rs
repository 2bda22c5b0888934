// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown date range preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
