//! In-memory repository implementations for tests and local
//! development.
//!
//! Serial id assignment mirrors the store's behavior; unique
//! constraints are enforced, foreign keys are not — callers rely on
//! the service-layer existence checks, as the real schema's FK
//! constraints are only the backstop. Clones share state.

use std::sync::Arc;

use parking_lot::Mutex;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateTeam, CreateUser, CreateWasteEntry, Team, User, WasteEntry};
use ecotrack_core::repository::{TeamRepository, UserRepository, WasteRepository};

#[derive(Default)]
struct TeamState {
    teams: Vec<Team>,
    next_id: i32,
}

#[derive(Clone, Default)]
pub struct MemoryTeamRepository {
    state: Arc<Mutex<TeamState>>,
}

impl MemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamRepository for MemoryTeamRepository {
    async fn create(&self, input: CreateTeam) -> Result<Team, StoreError> {
        let mut state = self.state.lock();
        if state.teams.iter().any(|t| t.name == input.name) {
            return Err(StoreError::UniqueViolation);
        }
        state.next_id += 1;
        let team = Team {
            id: state.next_id,
            name: input.name,
        };
        state.teams.push(team.clone());
        Ok(team)
    }

    async fn read(&self, id: i32) -> Result<Option<Team>, StoreError> {
        Ok(self.state.lock().teams.iter().find(|t| t.id == id).cloned())
    }

    async fn read_all(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.state.lock().teams.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.state.lock().teams.retain(|t| t.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct UserState {
    users: Vec<User>,
    next_id: i32,
}

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    state: Arc<Mutex<UserState>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, input: CreateUser) -> Result<User, StoreError> {
        let mut state = self.state.lock();
        if state
            .users
            .iter()
            .any(|u| u.username == input.username || u.email == input.email)
        {
            return Err(StoreError::UniqueViolation);
        }
        state.next_id += 1;
        let user = User {
            id: state.next_id,
            username: input.username,
            email: input.email,
            role: input.role,
            team_id: input.team_id,
            password_hash: input.password_hash,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn read(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.state.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .state
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<User>, StoreError> {
        Ok(self
            .state
            .lock()
            .users
            .iter()
            .filter(|u| u.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.state.lock().users.retain(|u| u.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct WasteState {
    entries: Vec<WasteEntry>,
    next_id: i32,
}

/// Holds a handle to the user repository so team-scoped reads can
/// resolve membership the way the Postgres implementation's join
/// does.
#[derive(Clone)]
pub struct MemoryWasteRepository {
    users: MemoryUserRepository,
    state: Arc<Mutex<WasteState>>,
}

impl MemoryWasteRepository {
    pub fn new(users: MemoryUserRepository) -> Self {
        Self {
            users,
            state: Arc::default(),
        }
    }
}

impl WasteRepository for MemoryWasteRepository {
    async fn create(&self, input: CreateWasteEntry) -> Result<WasteEntry, StoreError> {
        let mut state = self.state.lock();
        state.next_id += 1;
        let entry = WasteEntry {
            id: state.next_id,
            kind: input.kind,
            weight: input.weight,
            timestamp: input.timestamp,
            user_id: input.user_id,
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }

    async fn read(&self, id: i32) -> Result<Option<WasteEntry>, StoreError> {
        Ok(self
            .state
            .lock()
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        Ok(self
            .state
            .lock()
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        let members: Vec<i32> = self
            .users
            .get_by_team_id(team_id)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        Ok(self
            .state
            .lock()
            .entries
            .iter()
            .filter(|e| members.contains(&e.user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.state.lock().entries.retain(|e| e.id != id);
        Ok(())
    }
}
