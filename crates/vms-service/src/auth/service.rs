//! Registration, login, and logout.

use std::sync::Arc;

use tracing::info;

use vms_auth::jwt::encoder::JwtEncoder;
use vms_auth::password::PasswordHasher;
use vms_core::error::AppError;
use vms_database::stores::PrincipalStore;
use vms_entity::{NewPrincipal, Role};

use crate::context::RequestContext;

/// Handles principal registration and session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Principal store.
    principals: Arc<dyn PrincipalStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        principals: Arc<dyn PrincipalStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            principals,
            hasher,
            encoder,
        }
    }

    /// Registers a new principal under the given role.
    ///
    /// The username must be unique within the role.
    pub async fn register(&self, role: Role, username: &str, password: &str) -> Result<(), AppError> {
        if self.principals.find(role, username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        self.principals
            .create(&NewPrincipal {
                role,
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(%role, username, "Principal registered");
        Ok(())
    }

    /// Authenticates a principal and returns a bearer token.
    ///
    /// Unknown usernames and wrong passwords fail identically so the
    /// response does not reveal which credential was wrong.
    pub async fn login(&self, role: Role, username: &str, password: &str) -> Result<String, AppError> {
        let principal = self
            .principals
            .find(role, username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if !self
            .hasher
            .verify_password(password, &principal.password_hash)?
        {
            return Err(AppError::authentication("Invalid credentials"));
        }

        // Security logins reuse the recorded token while one is active;
        // staff logins always mint a fresh token.
        let token = match role {
            Role::Security => match principal.active_token() {
                Some(existing) => existing.to_string(),
                None => self.encoder.generate_token(username, role)?,
            },
            Role::Staff => self.encoder.generate_token(username, role)?,
        };

        // Bookkeeping only; token validity does not depend on this row.
        self.principals.set_token(role, username, &token).await?;

        info!(%role, username, "Principal logged in");
        Ok(token)
    }

    /// Clears the recorded token for the calling principal.
    ///
    /// Succeeds even when no matching principal row exists. The signed
    /// token itself remains verifiable until it expires.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.principals.clear_token(ctx.role, &ctx.username).await?;
        info!(role = %ctx.role, username = %ctx.username, "Principal logged out");
        Ok(())
    }
}
