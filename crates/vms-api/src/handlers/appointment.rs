//! Appointment handlers — booking, listing, verification, deletion.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::request::{AppointmentListQuery, CreateAppointmentRequest, UpdateVerificationRequest};
use crate::dto::response::AppointmentResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// POST /appointments
///
/// Unauthenticated: visitors book appointments without a token.
pub async fn create_appointment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateAppointmentRequest>,
) -> Result<&'static str, ApiError> {
    state.appointment_service.create(req.into()).await?;
    Ok("Appointment created successfully")
}

/// GET /staff-appointments/{username}
pub async fn list_staff_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<Vec<AppointmentResponse>>, ApiError> {
    let rows = state
        .appointment_service
        .list_for_staff(auth.context(), &username)
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /appointments?name=substring
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, ApiError> {
    let rows = state
        .appointment_service
        .list_all(auth.context(), query.name.as_deref())
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// PUT /appointments/{name}
pub async fn update_verification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<UpdateVerificationRequest>,
) -> Result<&'static str, ApiError> {
    state
        .appointment_service
        .set_verification(auth.context(), &name, req.verification)
        .await?;

    Ok("Appointment verification updated successfully")
}

/// DELETE /appointments/{name}
pub async fn delete_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> Result<&'static str, ApiError> {
    state
        .appointment_service
        .delete(auth.context(), &name)
        .await?;

    Ok("Appointment deleted successfully")
}
