//! Application state shared across all handlers.

use std::sync::Arc;

use vms_auth::jwt::decoder::JwtDecoder;
use vms_core::config::AppConfig;
use vms_service::appointment::AppointmentService;
use vms_service::auth::AuthService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token decoder used by the auth extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration, login, and logout.
    pub auth_service: Arc<AuthService>,
    /// Appointment operations.
    pub appointment_service: Arc<AppointmentService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        config: Arc<AppConfig>,
        jwt_decoder: Arc<JwtDecoder>,
        auth_service: Arc<AuthService>,
        appointment_service: Arc<AppointmentService>,
    ) -> Self {
        Self {
            config,
            jwt_decoder,
            auth_service,
            appointment_service,
        }
    }
}
