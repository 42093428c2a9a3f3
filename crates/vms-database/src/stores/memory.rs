//! In-memory store implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use vms_core::error::AppError;
use vms_core::result::AppResult;
use vms_entity::{Appointment, NewAppointment, NewPrincipal, Principal, Role};

use super::{AppointmentStore, PrincipalStore};

/// Principal store holding rows in a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct MemoryPrincipalStore {
    rows: Mutex<Vec<Principal>>,
}

impl MemoryPrincipalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrincipalStore for MemoryPrincipalStore {
    async fn find(&self, role: Role, username: &str) -> AppResult<Option<Principal>> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows
            .iter()
            .find(|p| p.role == role && p.username == username)
            .cloned())
    }

    async fn create(&self, data: &NewPrincipal) -> AppResult<Principal> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        if rows
            .iter()
            .any(|p| p.role == data.role && p.username == data.username)
        {
            return Err(AppError::conflict("Username already exists"));
        }

        let principal = Principal {
            id: Uuid::new_v4(),
            role: data.role,
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            token: None,
            created_at: Utc::now(),
        };
        rows.push(principal.clone());
        Ok(principal)
    }

    async fn set_token(&self, role: Role, username: &str, token: &str) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        match rows
            .iter_mut()
            .find(|p| p.role == role && p.username == username)
        {
            Some(p) => {
                p.token = Some(token.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_token(&self, role: Role, username: &str) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        match rows
            .iter_mut()
            .find(|p| p.role == role && p.username == username)
        {
            Some(p) => {
                p.token = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Appointment store holding rows in a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    rows: Mutex<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn create(&self, data: &NewAppointment) -> AppResult<Appointment> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        let appointment = Appointment {
            id: Uuid::new_v4(),
            visitor_name: data.visitor_name.clone(),
            company: data.company.clone(),
            purpose: data.purpose.clone(),
            phone_no: data.phone_no.clone(),
            date: data.date.clone(),
            time: data.time.clone(),
            verification: data.verification,
            staff_username: data.staff_username.clone(),
            created_at: Utc::now(),
        };
        rows.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_owner(&self, staff_username: &str) -> AppResult<Vec<Appointment>> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows
            .iter()
            .filter(|a| a.staff_username == staff_username)
            .cloned()
            .collect())
    }

    async fn find_all(&self, name_filter: Option<&str>) -> AppResult<Vec<Appointment>> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(match name_filter {
            Some(name) => {
                let needle = name.to_lowercase();
                rows.iter()
                    .filter(|a| a.visitor_name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => rows.clone(),
        })
    }

    async fn set_verification(
        &self,
        visitor_name: &str,
        staff_username: &str,
        verified: bool,
    ) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        match rows
            .iter_mut()
            .find(|a| a.visitor_name == visitor_name && a.staff_username == staff_username)
        {
            Some(a) => {
                a.verification = verified;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_name(&self, visitor_name: &str) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        match rows.iter().position(|a| a.visitor_name == visitor_name) {
            Some(idx) => {
                rows.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_principal(role: Role, username: &str) -> NewPrincipal {
        NewPrincipal {
            role,
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn new_appointment(visitor: &str, staff: &str) -> NewAppointment {
        NewAppointment {
            visitor_name: visitor.to_string(),
            company: "Acme".to_string(),
            purpose: "Meeting".to_string(),
            phone_no: "555-0100".to_string(),
            date: "2026-09-01".to_string(),
            time: "10:00".to_string(),
            verification: false,
            staff_username: staff.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_principal_conflicts() {
        let store = MemoryPrincipalStore::new();
        store
            .create(&new_principal(Role::Staff, "alice"))
            .await
            .unwrap();

        let err = store
            .create(&new_principal(Role::Staff, "alice"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, vms_core::error::ErrorKind::Conflict);

        // Same username under a different role is a separate principal.
        store
            .create(&new_principal(Role::Security, "alice"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_token_lifecycle() {
        let store = MemoryPrincipalStore::new();
        store
            .create(&new_principal(Role::Security, "guard1"))
            .await
            .unwrap();

        assert!(store.set_token(Role::Security, "guard1", "tok").await.unwrap());
        let p = store.find(Role::Security, "guard1").await.unwrap().unwrap();
        assert_eq!(p.token.as_deref(), Some("tok"));

        assert!(store.clear_token(Role::Security, "guard1").await.unwrap());
        let p = store.find(Role::Security, "guard1").await.unwrap().unwrap();
        assert!(p.token.is_none());

        assert!(!store.clear_token(Role::Security, "nobody").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_filter_is_case_insensitive_substring() {
        let store = MemoryAppointmentStore::new();
        store.create(&new_appointment("Alice Smith", "bob")).await.unwrap();
        store.create(&new_appointment("Carol Jones", "bob")).await.unwrap();

        let hits = store.find_all(Some("alice")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].visitor_name, "Alice Smith");

        let hits = store.find_all(Some("SMITH")).await.unwrap();
        assert_eq!(hits.len(), 1);

        let all = store.find_all(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_set_verification_requires_owner_match() {
        let store = MemoryAppointmentStore::new();
        store.create(&new_appointment("Alice", "bob")).await.unwrap();

        assert!(!store.set_verification("Alice", "mallory", true).await.unwrap());
        assert!(store.set_verification("Alice", "bob", true).await.unwrap());

        let rows = store.find_by_owner("bob").await.unwrap();
        assert!(rows[0].verification);
    }

    #[tokio::test]
    async fn test_set_verification_touches_oldest_duplicate_only() {
        let store = MemoryAppointmentStore::new();
        store.create(&new_appointment("Alice", "bob")).await.unwrap();
        store.create(&new_appointment("Alice", "bob")).await.unwrap();

        assert!(store.set_verification("Alice", "bob", true).await.unwrap());

        let rows = store.find_by_owner("bob").await.unwrap();
        assert!(rows[0].verification);
        assert!(!rows[1].verification);
    }

    #[tokio::test]
    async fn test_delete_by_name_removes_one_row_per_call() {
        let store = MemoryAppointmentStore::new();
        store.create(&new_appointment("Alice", "bob")).await.unwrap();
        store.create(&new_appointment("Alice", "carol")).await.unwrap();

        // Deletion ignores the owner but removes a single row at a time.
        assert_eq!(store.delete_by_name("Alice").await.unwrap(), 1);
        assert_eq!(store.find_by_owner("carol").await.unwrap().len(), 1);
        assert_eq!(store.delete_by_name("Alice").await.unwrap(), 1);
        assert_eq!(store.delete_by_name("Alice").await.unwrap(), 0);
    }
}
