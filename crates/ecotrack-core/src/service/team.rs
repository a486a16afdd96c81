//! Team service.

use tracing::{info, warn};

use crate::error::{EcotrackError, EcotrackResult};
use crate::models::{CreateTeam, Team};
use crate::repository::TeamRepository;

pub struct TeamService<T: TeamRepository> {
    teams: T,
}

impl<T: TeamRepository> TeamService<T> {
    pub fn new(teams: T) -> Self {
        Self { teams }
    }

    pub async fn create_team(&self, name: &str) -> EcotrackResult<Team> {
        if name.trim().is_empty() {
            return Err(EcotrackError::validation("team name must not be empty"));
        }

        info!(name, "creating team");
        let team = self.teams.create(CreateTeam { name: name.into() }).await?;
        info!(team_id = team.id, "team created");
        Ok(team)
    }

    pub async fn get_team(&self, team_id: i32) -> EcotrackResult<Option<Team>> {
        let team = self.teams.read(team_id).await?;
        if team.is_none() {
            warn!(team_id, "team not found");
        }
        Ok(team)
    }

    pub async fn list_teams(&self) -> EcotrackResult<Vec<Team>> {
        Ok(self.teams.read_all().await?)
    }

    /// Existence check used before creating dependent entities.
    pub async fn assert_team_exists(&self, team_id: i32) -> EcotrackResult<()> {
        match self.teams.read(team_id).await? {
            Some(_) => Ok(()),
            None => Err(EcotrackError::validation(format!(
                "team {team_id} does not exist"
            ))),
        }
    }
}
