//! Principal entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered principal (staff or security member).
///
/// Usernames are unique per role: the same username may exist once as
/// staff and once as security, matching the original split credential
/// collections.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Principal {
    /// Unique principal identifier.
    pub id: Uuid,
    /// The principal kind.
    pub role: Role,
    /// Unique login name within the role.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Most recently issued session token (bookkeeping only; bearer
    /// verification is stateless and does not consult this field).
    pub token: Option<String>,
    /// When the principal was created.
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Returns the stored token if it is present and non-empty.
    pub fn active_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Data required to create a new principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPrincipal {
    /// The principal kind.
    pub role: Role,
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
