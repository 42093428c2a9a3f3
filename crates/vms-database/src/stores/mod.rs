//! Persistence store traits and implementations.
//!
//! Stores abstract the storage backend so services can run against
//! PostgreSQL in production and an in-memory backend in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use vms_core::result::AppResult;
use vms_entity::{Appointment, NewAppointment, NewPrincipal, Principal, Role};

pub use memory::{MemoryAppointmentStore, MemoryPrincipalStore};
pub use postgres::{PgAppointmentStore, PgPrincipalStore};

/// Storage operations for authentication principals.
///
/// Principals are addressed by `(role, username)`; the same username may
/// exist once per role.
#[async_trait]
pub trait PrincipalStore: Send + Sync + std::fmt::Debug {
    /// Find a principal by role and username.
    async fn find(&self, role: Role, username: &str) -> AppResult<Option<Principal>>;

    /// Create a new principal. Fails with a conflict if the `(role,
    /// username)` pair already exists.
    async fn create(&self, data: &NewPrincipal) -> AppResult<Principal>;

    /// Record the most recently issued token for a principal. Returns
    /// whether a matching row existed.
    async fn set_token(&self, role: Role, username: &str, token: &str) -> AppResult<bool>;

    /// Clear the recorded token for a principal. Returns whether a
    /// matching row existed.
    async fn clear_token(&self, role: Role, username: &str) -> AppResult<bool>;
}

/// Storage operations for visitor appointments.
#[async_trait]
pub trait AppointmentStore: Send + Sync + std::fmt::Debug {
    /// Create a new appointment record.
    async fn create(&self, data: &NewAppointment) -> AppResult<Appointment>;

    /// List all appointments owned by the given staff member.
    async fn find_by_owner(&self, staff_username: &str) -> AppResult<Vec<Appointment>>;

    /// List all appointments, optionally filtered by a case-insensitive
    /// visitor-name substring match.
    async fn find_all(&self, name_filter: Option<&str>) -> AppResult<Vec<Appointment>>;

    /// Set the verification flag on one appointment matching the visitor
    /// name and owning staff member. When duplicate visitor names exist,
    /// only the oldest match changes. Returns whether a row matched.
    async fn set_verification(
        &self,
        visitor_name: &str,
        staff_username: &str,
        verified: bool,
    ) -> AppResult<bool>;

    /// Delete one appointment with the given visitor name, regardless of
    /// owner. Duplicates are removed one per call, oldest first. Returns
    /// the number of rows removed (0 or 1).
    async fn delete_by_name(&self, visitor_name: &str) -> AppResult<u64>;
}
