//! JWT token validation.
//!
//! Verification is stateless signature checking: logout clears the stored
//! bookkeeping token but does not revoke tokens already issued.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use vms_core::config::auth::AuthConfig;
use vms_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens against the shared signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        // Tokens minted without a TTL carry no exp claim; expiry is
        // enforced only when the claim is present.
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, checking the signature and,
    /// when present, the expiry.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authorization("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authorization("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authorization("Invalid token signature")
                    }
                    _ => AppError::authorization(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
