//! Appointment entity: a visitor-visit record owned by a staff member.

pub mod model;

pub use model::{Appointment, NewAppointment};
