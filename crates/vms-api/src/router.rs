//! Route definitions for the visitor management HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(auth_routes())
        .merge(appointment_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Registration, login, and logout endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register-staff", post(handlers::auth::register_staff))
        .route(
            "/register-security",
            post(handlers::auth::register_security),
        )
        .route("/login-staff", post(handlers::auth::login_staff))
        .route("/login-security", post(handlers::auth::login_security))
        .route("/logout", post(handlers::auth::logout))
}

/// Appointment booking and management endpoints.
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/appointments",
            post(handlers::appointment::create_appointment),
        )
        .route(
            "/appointments",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/staff-appointments/{username}",
            get(handlers::appointment::list_staff_appointments),
        )
        .route(
            "/appointments/{name}",
            put(handlers::appointment::update_verification),
        )
        .route(
            "/appointments/{name}",
            delete(handlers::appointment::delete_appointment),
        )
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
