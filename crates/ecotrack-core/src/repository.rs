//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async and return [`StoreError`] on
//! failure. Each entity has a direct persistent-store implementation
//! and a cache-decorating implementation behind the same trait; which
//! one a service talks to is decided at construction time.

use std::future::Future;

use crate::error::StoreError;
use crate::models::{CreateTeam, CreateUser, CreateWasteEntry, Team, User, WasteEntry};

pub trait TeamRepository: Send + Sync {
    /// Insert a team; the store assigns the id.
    fn create(&self, input: CreateTeam) -> impl Future<Output = Result<Team, StoreError>> + Send;

    fn read(&self, id: i32) -> impl Future<Output = Result<Option<Team>, StoreError>> + Send;

    fn read_all(&self) -> impl Future<Output = Result<Vec<Team>, StoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), StoreError>> + Send;
}

pub trait UserRepository: Send + Sync {
    /// Insert a user; the password arrives pre-hashed.
    fn create(&self, input: CreateUser) -> impl Future<Output = Result<User, StoreError>> + Send;

    fn read(&self, id: i32) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    fn get_by_team_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Vec<User>, StoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), StoreError>> + Send;
}

pub trait WasteRepository: Send + Sync {
    fn create(
        &self,
        input: CreateWasteEntry,
    ) -> impl Future<Output = Result<WasteEntry, StoreError>> + Send;

    fn read(&self, id: i32) -> impl Future<Output = Result<Option<WasteEntry>, StoreError>> + Send;

    fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Vec<WasteEntry>, StoreError>> + Send;

    /// All entries owned by members of the given team.
    fn get_by_team_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Vec<WasteEntry>, StoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<(), StoreError>> + Send;
}
