//! Postgres implementation of [`UserRepository`].

use sqlx::PgPool;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateUser, Role, User};
use ecotrack_core::repository::UserRepository;

use crate::error::store_err;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    role: String,
    team_id: i32,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, StoreError> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| StoreError::Other(format!("unknown role stored: {}", self.role)))?;
        Ok(User {
            id: self.id,
            username: self.username,
            email: self.email,
            role,
            team_id: self.team_id,
            password_hash: self.password_hash,
        })
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> Result<User, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (username, email, role, team_id, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(input.role.as_str())
        .bind(input.team_id)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(User {
            id,
            username: input.username,
            email: input.email,
            role: input.role,
            team_id: input.team_id,
            password_hash: input.password_hash,
        })
    }

    async fn read(&self, id: i32) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, email, role, team_id, password_hash
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, email, role, team_id, password_hash
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, username, email, role, team_id, password_hash
             FROM users WHERE team_id = $1 ORDER BY id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(())
    }
}
