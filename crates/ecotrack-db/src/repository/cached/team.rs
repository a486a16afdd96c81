//! Caching decorator for [`TeamRepository`].
//!
//! Key set: `team:{id}` per entity, `teams:all` for the full listing.

use tracing::debug;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateTeam, Team};
use ecotrack_core::repository::TeamRepository;

use crate::cache::Cache;

use super::{decode, encode};

const TEAMS_ALL_KEY: &str = "teams:all";

fn team_key(id: i32) -> String {
    format!("team:{id}")
}

#[derive(Clone)]
pub struct CachedTeamRepository<R, C> {
    inner: R,
    cache: C,
}

impl<R: TeamRepository, C: Cache> CachedTeamRepository<R, C> {
    pub fn new(inner: R, cache: C) -> Self {
        Self { inner, cache }
    }
}

impl<R: TeamRepository, C: Cache> TeamRepository for CachedTeamRepository<R, C> {
    async fn create(&self, input: CreateTeam) -> Result<Team, StoreError> {
        let team = self.inner.create(input).await?;
        self.cache.set(&team_key(team.id), &encode(&team)?).await?;
        self.cache.delete(TEAMS_ALL_KEY).await?;
        Ok(team)
    }

    async fn read(&self, id: i32) -> Result<Option<Team>, StoreError> {
        let key = team_key(id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(decode(&raw)?));
        }

        let team = self.inner.read(id).await?;
        if let Some(ref found) = team {
            self.cache.set(&key, &encode(found)?).await?;
        }
        Ok(team)
    }

    async fn read_all(&self) -> Result<Vec<Team>, StoreError> {
        if let Some(raw) = self.cache.get(TEAMS_ALL_KEY).await? {
            debug!(key = TEAMS_ALL_KEY, "cache hit");
            return Ok(decode(&raw)?);
        }

        let teams = self.inner.read_all().await?;
        self.cache.set(TEAMS_ALL_KEY, &encode(&teams)?).await?;
        Ok(teams)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.inner.delete(id).await?;
        self.cache.delete(&team_key(id)).await?;
        self.cache.delete(TEAMS_ALL_KEY).await?;
        Ok(())
    }
}
