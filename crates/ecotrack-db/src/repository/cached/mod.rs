//! Caching repository decorators.
//!
//! Each decorator wraps an underlying store repository behind the
//! identical trait, adding look-aside caching: reads consult the
//! cache first and populate it on miss; mutations invalidate every
//! cache key whose value depends on the affected row. The affected
//! key set is fixed per entity type. Entries carry no TTL, so any
//! write that bypasses the decorator desynchronizes the cache — all
//! writes are assumed to go through it.

mod team;
mod user;
mod waste;

pub use team::CachedTeamRepository;
pub use user::CachedUserRepository;
pub use waste::CachedWasteRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ecotrack_core::error::StoreError;

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Other(format!("cache encode: {e}")))
}

pub(crate) fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Other(format!("cache decode: {e}")))
}
