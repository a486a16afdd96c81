//! Postgres implementation of [`TeamRepository`].

use sqlx::PgPool;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateTeam, Team};
use ecotrack_core::repository::TeamRepository;

use crate::error::store_err;

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: i32,
    name: String,
}

impl TeamRow {
    fn into_team(self) -> Team {
        Team {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TeamRepository for PgTeamRepository {
    async fn create(&self, input: CreateTeam) -> Result<Team, StoreError> {
        let id: i32 = sqlx::query_scalar("INSERT INTO teams (name) VALUES ($1) RETURNING id")
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(Team {
            id,
            name: input.name,
        })
    }

    async fn read(&self, id: i32) -> Result<Option<Team>, StoreError> {
        let row: Option<TeamRow> = sqlx::query_as("SELECT id, name FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(row.map(TeamRow::into_team))
    }

    async fn read_all(&self) -> Result<Vec<Team>, StoreError> {
        let rows: Vec<TeamRow> = sqlx::query_as("SELECT id, name FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(rows.into_iter().map(TeamRow::into_team).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(())
    }
}
