//! Request DTOs.

use serde::{Deserialize, Serialize};

use vms_entity::NewAppointment;

/// Registration request body, shared by staff and security registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Reference to the staff member an appointment is booked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRef {
    /// Staff username, accepted as-is without a referential check.
    pub username: String,
}

/// Appointment booking request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
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
    /// Initial verification flag.
    pub verification: bool,
    /// Owning staff member.
    pub staff: StaffRef,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(req: CreateAppointmentRequest) -> Self {
        Self {
            visitor_name: req.name,
            company: req.company,
            purpose: req.purpose,
            phone_no: req.phone_no,
            date: req.date,
            time: req.time,
            verification: req.verification,
            staff_username: req.staff.username,
        }
    }
}

/// Verification update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVerificationRequest {
    /// New verification flag.
    pub verification: bool,
}

/// Query parameters for the security appointment listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentListQuery {
    /// Case-insensitive visitor-name substring filter.
    pub name: Option<String>,
}
