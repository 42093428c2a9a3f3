//! # vms-api
//!
//! HTTP API layer for the visitor management service built on Axum.
//!
//! Provides the REST endpoints, the bearer-token extractor, DTOs, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
