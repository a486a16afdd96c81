//! Authenticated caller identity.

use crate::models::user::Role;

/// The authenticated caller's claims, reconstructed from a verified
/// token for the duration of one operation. Never persisted — the
/// token is the source of truth until it expires or the user
/// re-authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub team_id: i32,
}
