//! Key-value cache collaborator.
//!
//! Entities are serialized to JSON strings before storage and
//! reversed on read. Entries have no expiry — correctness relies on
//! the caching repositories invalidating every affected key on
//! mutation. Backend failures surface as [`StoreError::Cache`];
//! there is no silent fallback to store-only reads.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use redis::AsyncCommands;
use tracing::info;

use ecotrack_core::error::StoreError;

pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Configuration for connecting to Redis.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".into(),
        }
    }
}

fn cache_err(err: redis::RedisError) -> StoreError {
    StoreError::Cache(err.to_string())
}

/// Redis-backed cache using a multiplexed connection manager, safe
/// for concurrent use across tasks.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    pub async fn connect(config: &CacheConfig) -> Result<Self, StoreError> {
        info!("connecting to Redis");
        let client = redis::Client::open(config.url.as_str()).map_err(cache_err)?;
        let conn = client.get_connection_manager().await.map_err(cache_err)?;
        info!("connected to Redis");
        Ok(Self { conn })
    }
}

impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(cache_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set(key, value).await.map_err(cache_err)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del(key).await.map_err(cache_err)
    }
}

/// In-memory cache for tests and local development. Clones share the
/// same underlying map.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is currently populated. Test helper.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.into(), value.into());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_cache_roundtrip() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("k").await.unwrap(), None);

        cache.set("k", "v").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some("v".into()));

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_cache_clones_share_state() {
        let cache = MemoryCache::new();
        let other = cache.clone();
        cache.set("k", "v").await.unwrap();
        assert!(other.contains("k"));
    }
}
