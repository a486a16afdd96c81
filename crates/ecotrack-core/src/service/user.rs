//! User service.
//!
//! Team membership is checked against the team collaborator before
//! creation; the schema's foreign-key constraint is the backstop if
//! the team disappears between the check and the insert.

use tracing::{info, warn};

use crate::error::{EcotrackError, EcotrackResult};
use crate::models::{CreateUser, Role, User};
use crate::password;
use crate::repository::{TeamRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub team_id: i32,
    pub password: String,
}

pub struct UserService<T: TeamRepository, U: UserRepository> {
    teams: T,
    users: U,
}

impl<T: TeamRepository, U: UserRepository> UserService<T, U> {
    pub fn new(teams: T, users: U) -> Self {
        Self { teams, users }
    }

    pub async fn create_user(&self, input: NewUser) -> EcotrackResult<User> {
        if input.username.trim().is_empty() {
            return Err(EcotrackError::validation("username must not be empty"));
        }
        if !input.email.contains('@') {
            return Err(EcotrackError::validation("invalid email address"));
        }
        if input.password.is_empty() {
            return Err(EcotrackError::validation("password must not be empty"));
        }

        if self.teams.read(input.team_id).await?.is_none() {
            warn!(team_id = input.team_id, "user creation against missing team");
            return Err(EcotrackError::validation(format!(
                "team {} does not exist",
                input.team_id
            )));
        }

        let password_hash = password::hash_password(&input.password)
            .map_err(|e| EcotrackError::Crypto(e.to_string()))?;

        info!(username = %input.username, team_id = input.team_id, "creating user");
        let user = self
            .users
            .create(CreateUser {
                username: input.username,
                email: input.email,
                role: input.role,
                team_id: input.team_id,
                password_hash,
            })
            .await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i32) -> EcotrackResult<Option<User>> {
        Ok(self.users.read(user_id).await?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> EcotrackResult<Option<User>> {
        Ok(self.users.get_by_username(username).await?)
    }

    pub async fn get_users_by_team_id(&self, team_id: i32) -> EcotrackResult<Vec<User>> {
        Ok(self.users.get_by_team_id(team_id).await?)
    }

    pub async fn delete_user(&self, user_id: i32) -> EcotrackResult<()> {
        info!(user_id, "deleting user");
        Ok(self.users.delete(user_id).await?)
    }
}
