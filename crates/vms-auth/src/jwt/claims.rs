//! JWT claims structure embedded in every bearer token.

use serde::{Deserialize, Serialize};

use vms_entity::principal::Role;

/// Claims payload: the principal's identity and role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the principal.
    pub username: String,
    /// Role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp. Absent by default; tokens only expire when a
    /// TTL is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
