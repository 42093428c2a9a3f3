//! JWT token creation with configurable signing and optional TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use vms_core::config::auth::AuthConfig;
use vms_core::error::AppError;
use vms_entity::principal::Role;

use super::claims::Claims;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes; `None` mints tokens without an expiry.
    ttl_minutes: Option<i64>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes.map(|m| m as i64),
        }
    }

    /// Generates a signed token for the given principal identity.
    pub fn generate_token(&self, username: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = Claims {
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: self
                .ttl_minutes
                .map(|m| (now + chrono::Duration::minutes(m)).timestamp()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
