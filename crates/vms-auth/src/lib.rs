//! # vms-auth
//!
//! Token issuing/verification and password hashing. Bearer tokens are
//! stateless HMAC-signed JWTs carrying the principal's username and role;
//! passwords are hashed with Argon2id.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
