//! Caching decorator for [`WasteRepository`].
//!
//! Key set: `waste:{id}` per entry, `waste_by_user:{user_id}` and
//! `waste_by_team:{team_id}` for the aggregates. The team aggregate
//! depends on the owning user's team, so the decorator carries a
//! user-lookup collaborator to resolve it when invalidating.

use tracing::debug;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateWasteEntry, WasteEntry};
use ecotrack_core::repository::{UserRepository, WasteRepository};

use crate::cache::Cache;

use super::{decode, encode};

fn waste_key(id: i32) -> String {
    format!("waste:{id}")
}

fn user_entries_key(user_id: i32) -> String {
    format!("waste_by_user:{user_id}")
}

fn team_entries_key(team_id: i32) -> String {
    format!("waste_by_team:{team_id}")
}

#[derive(Clone)]
pub struct CachedWasteRepository<R, U, C> {
    inner: R,
    users: U,
    cache: C,
}

impl<R: WasteRepository, U: UserRepository, C: Cache> CachedWasteRepository<R, U, C> {
    pub fn new(inner: R, users: U, cache: C) -> Self {
        Self {
            inner,
            users,
            cache,
        }
    }

    async fn invalidate_aggregates(&self, user_id: i32) -> Result<(), StoreError> {
        self.cache.delete(&user_entries_key(user_id)).await?;
        if let Some(user) = self.users.read(user_id).await? {
            self.cache.delete(&team_entries_key(user.team_id)).await?;
        }
        Ok(())
    }
}

impl<R: WasteRepository, U: UserRepository, C: Cache> WasteRepository
    for CachedWasteRepository<R, U, C>
{
    async fn create(&self, input: CreateWasteEntry) -> Result<WasteEntry, StoreError> {
        let entry = self.inner.create(input).await?;
        self.cache.set(&waste_key(entry.id), &encode(&entry)?).await?;
        self.invalidate_aggregates(entry.user_id).await?;
        Ok(entry)
    }

    async fn read(&self, id: i32) -> Result<Option<WasteEntry>, StoreError> {
        let key = waste_key(id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(decode(&raw)?));
        }

        let entry = self.inner.read(id).await?;
        if let Some(ref found) = entry {
            self.cache.set(&key, &encode(found)?).await?;
        }
        Ok(entry)
    }

    async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        let key = user_entries_key(user_id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(decode(&raw)?);
        }

        let entries = self.inner.get_by_user_id(user_id).await?;
        self.cache.set(&key, &encode(&entries)?).await?;
        Ok(entries)
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        let key = team_entries_key(team_id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(decode(&raw)?);
        }

        let entries = self.inner.get_by_team_id(team_id).await?;
        self.cache.set(&key, &encode(&entries)?).await?;
        Ok(entries)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        // Discover the owning user before the row disappears.
        let entry = self.inner.read(id).await?;
        self.inner.delete(id).await?;

        self.cache.delete(&waste_key(id)).await?;
        if let Some(entry) = entry {
            self.invalidate_aggregates(entry.user_id).await?;
        }
        Ok(())
    }
}
