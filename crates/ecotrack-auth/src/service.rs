//! Authentication service — credential login and bearer-token
//! verification.

use chrono::Utc;
use tracing::{info, warn};

use ecotrack_core::models::{Identity, User};
use ecotrack_core::password;
use ecotrack_core::repository::UserRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token::{self, Claims};

const BEARER_PREFIX: &str = "Bearer ";

/// Authentication service.
///
/// Generic over the user repository so the auth layer has no
/// dependency on the database crate.
pub struct AuthService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Authenticate with username + password and issue a token
    /// embedding the user's full claim set. Single-shot; no state is
    /// mutated.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        info!(username, "authenticating user");

        let user = self
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "authentication failed: user not found");
                AuthError::UserNotFound(username.into())
            })?;

        let valid = password::verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Crypto(e.to_string()))?;
        if !valid {
            warn!(username, "authentication failed: wrong password");
            return Err(AuthError::WrongPassword);
        }

        let token = self.issue_for(&user)?;
        info!(username, "user authenticated");
        Ok(token)
    }

    /// Validate an `Authorization` header value and reconstruct the
    /// caller's identity from the verified claims.
    ///
    /// No database round trip — the token is the source of truth for
    /// the request's duration, so role or team changes only take
    /// effect once the user re-authenticates (or the token expires).
    pub fn verify_authentication(&self, header: Option<&str>) -> Result<Identity, AuthError> {
        let token = header
            .and_then(|h| h.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| {
                warn!("invalid or missing Authorization header");
                AuthError::MissingOrMalformedHeader
            })?;

        let claims = token::decode_token(token.trim(), &self.config).map_err(|e| {
            warn!(error = %e, "token verification failed");
            AuthError::Token(e)
        })?;

        Ok(Identity {
            id: claims.sub,
            username: claims.username,
            email: claims.email,
            role: claims.role,
            team_id: claims.team_id,
        })
    }

    fn issue_for(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            iat: now,
            exp: Some(now + self.config.token_lifetime_secs as i64),
            role: user.role,
            username: user.username.clone(),
            email: user.email.clone(),
            team_id: user.team_id,
        };
        Ok(token::issue_token(&claims, &self.config)?)
    }
}
