//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two disjoint principal kinds.
///
/// Every authorization decision matches exhaustively on this enum, so a
/// misspelled role can never silently pass a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Office staff member; owns and verifies appointments.
    Staff,
    /// Security member; registers staff and reviews all appointments.
    Security,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Security => "security",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = vms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "security" => Ok(Self::Security),
            _ => Err(vms_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: staff, security"
            ))),
        }
    }
}
