//! PostgreSQL-backed store implementations.

use async_trait::async_trait;
use sqlx::PgPool;

use vms_core::error::{AppError, ErrorKind};
use vms_core::result::AppResult;
use vms_entity::{Appointment, NewAppointment, NewPrincipal, Principal, Role};

use super::{AppointmentStore, PrincipalStore};

/// Principal store backed by the `principals` table.
#[derive(Debug, Clone)]
pub struct PgPrincipalStore {
    pool: PgPool,
}

impl PgPrincipalStore {
    /// Create a new principal store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalStore for PgPrincipalStore {
    async fn find(&self, role: Role, username: &str) -> AppResult<Option<Principal>> {
        sqlx::query_as::<_, Principal>(
            "SELECT * FROM principals WHERE role = $1 AND username = $2",
        )
        .bind(role)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find principal", e))
    }

    async fn create(&self, data: &NewPrincipal) -> AppResult<Principal> {
        sqlx::query_as::<_, Principal>(
            "INSERT INTO principals (role, username, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.role)
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("principals_role_username_key") =>
            {
                AppError::conflict("Username already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create principal", e),
        })
    }

    async fn set_token(&self, role: Role, username: &str, token: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE principals SET token = $3 WHERE role = $1 AND username = $2",
        )
        .bind(role)
        .bind(username)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store token", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear_token(&self, role: Role, username: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE principals SET token = NULL WHERE role = $1 AND username = $2",
        )
        .bind(role)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear token", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Appointment store backed by the `appointments` table.
#[derive(Debug, Clone)]
pub struct PgAppointmentStore {
    pool: PgPool,
}

impl PgAppointmentStore {
    /// Create a new appointment store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn create(&self, data: &NewAppointment) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments \
               (visitor_name, company, purpose, phone_no, date, time, verification, staff_username) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.visitor_name)
        .bind(&data.company)
        .bind(&data.purpose)
        .bind(&data.phone_no)
        .bind(&data.date)
        .bind(&data.time)
        .bind(data.verification)
        .bind(&data.staff_username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create appointment", e))
    }

    async fn find_by_owner(&self, staff_username: &str) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE staff_username = $1 ORDER BY created_at ASC",
        )
        .bind(staff_username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list appointments", e))
    }

    async fn find_all(&self, name_filter: Option<&str>) -> AppResult<Vec<Appointment>> {
        match name_filter {
            Some(name) => {
                let pattern = format!("%{name}%");
                sqlx::query_as::<_, Appointment>(
                    "SELECT * FROM appointments WHERE visitor_name ILIKE $1 \
                     ORDER BY created_at ASC",
                )
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Appointment>(
                    "SELECT * FROM appointments ORDER BY created_at ASC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list appointments", e))
    }

    async fn set_verification(
        &self,
        visitor_name: &str,
        staff_username: &str,
        verified: bool,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE appointments SET verification = $3 \
             WHERE id = (SELECT id FROM appointments \
                         WHERE visitor_name = $1 AND staff_username = $2 \
                         ORDER BY created_at ASC LIMIT 1)",
        )
        .bind(visitor_name)
        .bind(staff_username)
        .bind(verified)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update verification", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_name(&self, visitor_name: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM appointments \
             WHERE id = (SELECT id FROM appointments WHERE visitor_name = $1 \
                         ORDER BY created_at ASC LIMIT 1)",
        )
        .bind(visitor_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete appointment", e)
        })?;

        Ok(result.rows_affected())
    }
}
