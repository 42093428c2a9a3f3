//! Database layer: connection pooling, migrations, and persistence stores.

pub mod connection;
pub mod migration;
pub mod stores;

pub use connection::DatabasePool;
pub use stores::{AppointmentStore, PrincipalStore};
