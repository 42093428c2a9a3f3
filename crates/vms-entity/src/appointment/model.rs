//! Appointment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A visitor appointment record.
///
/// The visitor name acts as the de facto lookup key for verification
/// updates and deletion; uniqueness is not enforced. Date and time are
/// stored as the caller-supplied strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// Name of the visitor.
    pub visitor_name: String,
    /// Visitor's company.
    pub company: String,
    /// Purpose of the visit.
    pub purpose: String,
    /// Visitor's phone number.
    pub phone_no: String,
    /// Calendar date of the visit.
    pub date: String,
    /// Time of the visit.
    pub time: String,
    /// Whether the owning staff member has verified the appointment.
    pub verification: bool,
    /// Username of the staff member who owns this appointment. Accepted
    /// as-is from the caller; no referential check at write time.
    pub staff_username: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    /// Name of the visitor.
    pub visitor_name: String,
    /// Visitor's company.
    pub company: String,
    /// Purpose of the visit.
    pub purpose: String,
    /// Visitor's phone number.
    pub phone_no: String,
    /// Calendar date of the visit.
    pub date: String,
    /// Time of the visit.
    pub time: String,
    /// Initial verification flag.
    pub verification: bool,
    /// Owning staff username.
    pub staff_username: String,
}
