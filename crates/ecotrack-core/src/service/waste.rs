//! Waste entry service.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::{EcotrackError, EcotrackResult};
use crate::models::{CreateWasteEntry, WasteEntry};
use crate::repository::{UserRepository, WasteRepository};

#[derive(Debug, Clone)]
pub struct NewWasteEntry {
    pub kind: String,
    pub weight: f64,
    pub user_id: i32,
    /// Defaults to the current time when not supplied.
    pub timestamp: Option<DateTime<Utc>>,
}

pub struct WasteService<U: UserRepository, W: WasteRepository> {
    users: U,
    waste: W,
}

impl<U: UserRepository, W: WasteRepository> WasteService<U, W> {
    pub fn new(users: U, waste: W) -> Self {
        Self { users, waste }
    }

    /// Validates the payload and the referenced user before any store
    /// mutation occurs.
    pub async fn create_waste(&self, input: NewWasteEntry) -> EcotrackResult<WasteEntry> {
        if input.kind.trim().is_empty() {
            return Err(EcotrackError::validation("waste type must not be empty"));
        }
        if !input.weight.is_finite() || input.weight <= 0.0 {
            return Err(EcotrackError::validation(
                "weight must be a positive number",
            ));
        }

        if self.users.read(input.user_id).await?.is_none() {
            warn!(user_id = input.user_id, "waste entry against missing user");
            return Err(EcotrackError::validation(format!(
                "user {} does not exist",
                input.user_id
            )));
        }

        info!(user_id = input.user_id, kind = %input.kind, "creating waste entry");
        let entry = self
            .waste
            .create(CreateWasteEntry {
                kind: input.kind,
                weight: input.weight,
                timestamp: input.timestamp.unwrap_or_else(Utc::now),
                user_id: input.user_id,
            })
            .await?;
        info!(entry_id = entry.id, "waste entry created");
        Ok(entry)
    }

    pub async fn get_waste(&self, entry_id: i32) -> EcotrackResult<Option<WasteEntry>> {
        Ok(self.waste.read(entry_id).await?)
    }

    pub async fn get_waste_by_user_id(&self, user_id: i32) -> EcotrackResult<Vec<WasteEntry>> {
        Ok(self.waste.get_by_user_id(user_id).await?)
    }

    pub async fn get_waste_by_team_id(&self, team_id: i32) -> EcotrackResult<Vec<WasteEntry>> {
        Ok(self.waste.get_by_team_id(team_id).await?)
    }
}
