//! HTTP handlers grouped by domain.

pub mod appointment;
pub mod auth;
pub mod health;
