// User Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};

/// User ID (database-assigned, AUTOINCREMENT)
pub type UserId = i64;

/// User entity as stored, including the credential hash.
///
/// Never serialized: everything that crosses the wire goes through
/// [`UserProfile`], which has no hash field.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Wire-safe view of this user.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Input for creating a user row. The hash is already computed;
/// plaintext passwords never reach the repository layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Serializable view of a user without the credential hash.
///
/// The timestamp keys follow the public API contract (`createdat`,
/// `updatedat`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Avatar badge text: first two characters of the name, uppercased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliberately not a full RFC 5322 parser.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || DomainError::InvalidEmail(email.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) if !head.is_empty() && !tld.is_empty() => {
            if head.starts_with('.') || head.ends_with('.') {
                Err(invalid())
            } else {
                Ok(())
            }
        }
        _ => Err(invalid()),
    }
}
