//! Business logic: authentication and appointment workflows.

pub mod appointment;
pub mod auth;
pub mod context;

pub use appointment::AppointmentService;
pub use auth::AuthService;
pub use context::RequestContext;
