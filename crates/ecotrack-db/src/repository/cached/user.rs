//! Caching decorator for [`UserRepository`].
//!
//! Key set: `user:{id}` and `user_by_username:{username}` per entity,
//! `users_by_team:{team_id}` for the team listing. Deleting a user
//! first reads it from the underlying store to discover the username
//! and team for invalidation.

use tracing::debug;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateUser, User};
use ecotrack_core::repository::UserRepository;

use crate::cache::Cache;

use super::{decode, encode};

fn user_key(id: i32) -> String {
    format!("user:{id}")
}

fn username_key(username: &str) -> String {
    format!("user_by_username:{username}")
}

fn team_members_key(team_id: i32) -> String {
    format!("users_by_team:{team_id}")
}

#[derive(Clone)]
pub struct CachedUserRepository<R, C> {
    inner: R,
    cache: C,
}

impl<R: UserRepository, C: Cache> CachedUserRepository<R, C> {
    pub fn new(inner: R, cache: C) -> Self {
        Self { inner, cache }
    }
}

impl<R: UserRepository, C: Cache> UserRepository for CachedUserRepository<R, C> {
    async fn create(&self, input: CreateUser) -> Result<User, StoreError> {
        let user = self.inner.create(input).await?;
        let encoded = encode(&user)?;
        self.cache.set(&user_key(user.id), &encoded).await?;
        self.cache.set(&username_key(&user.username), &encoded).await?;
        self.cache.delete(&team_members_key(user.team_id)).await?;
        Ok(user)
    }

    async fn read(&self, id: i32) -> Result<Option<User>, StoreError> {
        let key = user_key(id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(decode(&raw)?));
        }

        let user = self.inner.read(id).await?;
        if let Some(ref found) = user {
            self.cache.set(&key, &encode(found)?).await?;
        }
        Ok(user)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let key = username_key(username);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(decode(&raw)?));
        }

        let user = self.inner.get_by_username(username).await?;
        if let Some(ref found) = user {
            self.cache.set(&key, &encode(found)?).await?;
        }
        Ok(user)
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<User>, StoreError> {
        let key = team_members_key(team_id);
        if let Some(raw) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(decode(&raw)?);
        }

        let users = self.inner.get_by_team_id(team_id).await?;
        self.cache.set(&key, &encode(&users)?).await?;
        Ok(users)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        // Read from the store, not the cache, so invalidation uses
        // the row's actual foreign keys.
        let user = self.inner.read(id).await?;
        self.inner.delete(id).await?;

        self.cache.delete(&user_key(id)).await?;
        if let Some(user) = user {
            self.cache.delete(&username_key(&user.username)).await?;
            self.cache.delete(&team_members_key(user.team_id)).await?;
        }
        Ok(())
    }
}
