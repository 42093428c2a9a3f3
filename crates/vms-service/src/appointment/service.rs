//! Appointment booking, listing, verification, and removal.

use std::sync::Arc;

use tracing::info;

use vms_core::error::AppError;
use vms_database::stores::AppointmentStore;
use vms_entity::{Appointment, NewAppointment};

use crate::context::RequestContext;

/// Handles visitor appointment operations.
#[derive(Debug, Clone)]
pub struct AppointmentService {
    /// Appointment store.
    appointments: Arc<dyn AppointmentStore>,
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(appointments: Arc<dyn AppointmentStore>) -> Self {
        Self { appointments }
    }

    /// Books a new appointment.
    ///
    /// Open to unauthenticated callers. The owning staff username is
    /// taken from the request body as-is without a referential check.
    pub async fn create(&self, data: NewAppointment) -> Result<Appointment, AppError> {
        let appointment = self.appointments.create(&data).await?;
        info!(
            visitor = %appointment.visitor_name,
            staff = %appointment.staff_username,
            "Appointment created"
        );
        Ok(appointment)
    }

    /// Lists the appointments owned by a staff member.
    ///
    /// Staff may only list their own appointments.
    pub async fn list_for_staff(
        &self,
        ctx: &RequestContext,
        staff_username: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        if !ctx.is_staff() || ctx.username != staff_username {
            return Err(AppError::authorization("Access denied"));
        }

        self.appointments.find_by_owner(staff_username).await
    }

    /// Lists all appointments, optionally filtered by a case-insensitive
    /// visitor-name substring. Security members only.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        name_filter: Option<&str>,
    ) -> Result<Vec<Appointment>, AppError> {
        if !ctx.is_security() {
            return Err(AppError::authorization("Access denied"));
        }

        self.appointments.find_all(name_filter).await
    }

    /// Sets the verification flag on an appointment owned by the caller.
    ///
    /// Ownership is enforced through the update filter: an appointment
    /// owned by another staff member reports not-found rather than
    /// revealing it exists.
    pub async fn set_verification(
        &self,
        ctx: &RequestContext,
        visitor_name: &str,
        verified: bool,
    ) -> Result<(), AppError> {
        if !ctx.is_staff() {
            return Err(AppError::authorization("Access denied"));
        }

        let matched = self
            .appointments
            .set_verification(visitor_name, &ctx.username, verified)
            .await?;

        if !matched {
            return Err(AppError::not_found("Appointment not found"));
        }

        info!(visitor = %visitor_name, staff = %ctx.username, verified, "Verification updated");
        Ok(())
    }

    /// Deletes one appointment with the given visitor name.
    ///
    /// Any staff member may delete any appointment; duplicate visitor
    /// names go one per call, and deleting a name with no matching rows
    /// still succeeds.
    pub async fn delete(&self, ctx: &RequestContext, visitor_name: &str) -> Result<(), AppError> {
        if !ctx.is_staff() {
            return Err(AppError::authorization("Access denied"));
        }

        let removed = self.appointments.delete_by_name(visitor_name).await?;
        info!(visitor = %visitor_name, staff = %ctx.username, removed, "Appointment deleted");
        Ok(())
    }
}
