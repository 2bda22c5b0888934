// Domain Layer - Pure business logic and entities

pub mod chart;
pub mod contact;
pub mod error;
pub mod user;

// Re-exports
pub use chart::{ChartPoint, DateRange, RangePreset};
pub use contact::Contact;
pub use error::DomainError;
pub use user::{NewUser, User, UserId, UserProfile};
