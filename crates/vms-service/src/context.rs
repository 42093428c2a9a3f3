//! Request context carrying the authenticated principal.

use serde::{Deserialize, Serialize};

use vms_entity::principal::Role;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token by the API layer and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated principal's username.
    pub username: String,
    /// The principal's role at the time the token was issued.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: String, role: Role) -> Self {
        Self { username, role }
    }

    /// Returns whether the current principal is a staff member.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff)
    }

    /// Returns whether the current principal is a security member.
    pub fn is_security(&self) -> bool {
        matches!(self.role, Role::Security)
    }
}
