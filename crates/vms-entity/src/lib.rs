//! # vms-entity
//!
//! Domain entity models for the visitor appointment service: principals
//! (staff and security members), appointments, and the role enumeration.

pub mod appointment;
pub mod principal;

pub use appointment::{Appointment, NewAppointment};
pub use principal::{NewPrincipal, Principal, Role};
