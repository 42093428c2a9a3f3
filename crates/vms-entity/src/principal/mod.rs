//! Principal entity: a staff or security member with stored credentials.

pub mod model;
pub mod role;

pub use model::{NewPrincipal, Principal};
pub use role::Role;
