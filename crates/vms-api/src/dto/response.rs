//! Response DTOs.

use serde::{Deserialize, Serialize};

use vms_entity::Appointment;

use super::request::StaffRef;

/// Login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// Appointment as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    /// Visitor name.
    pub name: String,
    /// Visitor's company.
    pub company: String,
    /// Purpose of the visit.
    pub purpose: String,
    /// Visitor phone number.
    #[serde(rename = "phoneNo")]
    pub phone_no: String,
    /// Calendar date of the visit.
    pub date: String,
    /// Time of the visit.
    pub time: String,
    /// Verification flag.
    pub verification: bool,
    /// Owning staff member.
    pub staff: StaffRef,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            name: a.visitor_name,
            company: a.company,
            purpose: a.purpose,
            phone_no: a.phone_no,
            date: a.date,
            time: a.time,
            verification: a.verification,
            staff: StaffRef {
                username: a.staff_username,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
