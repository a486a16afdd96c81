//! Postgres implementation of [`WasteRepository`].

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use ecotrack_core::error::StoreError;
use ecotrack_core::models::{CreateWasteEntry, WasteEntry};
use ecotrack_core::repository::WasteRepository;

use crate::error::store_err;

#[derive(Debug, sqlx::FromRow)]
struct WasteRow {
    id: i32,
    #[sqlx(rename = "type")]
    kind: String,
    weight: f64,
    timestamp: DateTime<Utc>,
    user_id: i32,
}

impl WasteRow {
    fn into_entry(self) -> WasteEntry {
        WasteEntry {
            id: self.id,
            kind: self.kind,
            weight: self.weight,
            timestamp: self.timestamp,
            user_id: self.user_id,
        }
    }
}

#[derive(Clone)]
pub struct PgWasteRepository {
    pool: PgPool,
}

impl PgWasteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WasteRepository for PgWasteRepository {
    async fn create(&self, input: CreateWasteEntry) -> Result<WasteEntry, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO waste_entries (type, weight, timestamp, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.kind)
        .bind(input.weight)
        .bind(input.timestamp)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(WasteEntry {
            id,
            kind: input.kind,
            weight: input.weight,
            timestamp: input.timestamp,
            user_id: input.user_id,
        })
    }

    async fn read(&self, id: i32) -> Result<Option<WasteEntry>, StoreError> {
        let row: Option<WasteRow> = sqlx::query_as(
            "SELECT id, type, weight, timestamp, user_id
             FROM waste_entries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(WasteRow::into_entry))
    }

    async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        let rows: Vec<WasteRow> = sqlx::query_as(
            "SELECT id, type, weight, timestamp, user_id
             FROM waste_entries WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(WasteRow::into_entry).collect())
    }

    async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<WasteEntry>, StoreError> {
        let rows: Vec<WasteRow> = sqlx::query_as(
            "SELECT w.id, w.type, w.weight, w.timestamp, w.user_id
             FROM waste_entries w
             JOIN users u ON u.id = w.user_id
             WHERE u.team_id = $1
             ORDER BY w.id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(WasteRow::into_entry).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM waste_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(())
    }
}
