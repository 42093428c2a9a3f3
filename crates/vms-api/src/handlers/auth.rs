//! Auth handlers — registration, login, logout.

use axum::Json;
use axum::extract::State;

use vms_core::error::AppError;
use vms_entity::principal::Role;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /register-staff
///
/// Only an authenticated security member may register staff.
pub async fn register_staff(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<&'static str, ApiError> {
    if !auth.is_security() {
        return Err(AppError::authorization("Access denied").into());
    }

    state
        .auth_service
        .register(Role::Staff, &req.username, &req.password)
        .await?;

    Ok("Staff registered successfully")
}

/// POST /register-security
pub async fn register_security(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<&'static str, ApiError> {
    state
        .auth_service
        .register(Role::Security, &req.username, &req.password)
        .await?;

    Ok("Security registered successfully")
}

/// POST /login-staff
pub async fn login_staff(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .login(Role::Staff, &req.username, &req.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// POST /login-security
pub async fn login_security(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .login(Role::Security, &req.username, &req.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<&'static str, ApiError> {
    state.auth_service.logout(auth.context()).await?;
    Ok("Logged out successfully")
}
