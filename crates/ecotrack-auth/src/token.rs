//! Stateless token codec: HS256 JWT issuance and verification.
//!
//! The wire format is the standard three-segment dot-joined base64url
//! string signed with HMAC-SHA256 over `header || "." || payload`,
//! keyed by the server-held secret — byte-compatible with previously
//! issued tokens. No I/O; pure computation.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use ecotrack_core::models::Role;

use crate::config::AuthConfig;
use crate::error::TokenError;

/// Claims carried in every token issued by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — user id.
    pub sub: i32,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp). Verification tolerates tokens
    /// without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    pub role: Role,
    pub username: String,
    pub email: String,
    pub team_id: i32,
}

/// Sign the claims into a compact token string.
pub fn issue_token(claims: &Claims, config: &AuthConfig) -> Result<String, TokenError> {
    let key = EncodingKey::from_secret(config.secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| TokenError::Malformed(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims.
///
/// Fails `Malformed` if the token does not split into three segments
/// or the payload is not valid claims data, `BadSignature` if the
/// recomputed signature does not match, and `Expired` if an `exp`
/// claim is present and in the past.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    // Expiry is checked manually below so that tokens without an
    // `exp` claim still verify.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data =
        jsonwebtoken::decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(e.to_string()),
        })?;

    if let Some(exp) = data.claims.exp {
        if exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
    }

    Ok(data.claims)
}
