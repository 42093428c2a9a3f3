//! Appointment workflows.

pub mod service;

pub use service::AppointmentService;
