// User Repository Port (Interface)

use crate::domain::{NewUser, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for user persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row (with assigned id)
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Count all users
    async fn count(&self) -> Result<i64>;
}
