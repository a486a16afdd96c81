//! Schema initialization and idempotent bootstrap seeding.
//!
//! Foreign-key constraints on `users.team_id` and
//! `waste_entries.user_id` back up the service-layer existence
//! checks, closing the check-then-act window between "referenced
//! entity exists" and the dependent insert.

use sqlx::PgPool;
use tracing::info;

use ecotrack_core::password;
use ecotrack_core::{EcotrackError, EcotrackResult, StoreError};

use crate::error::store_err;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS teams (
        id   serial PRIMARY KEY,
        name varchar(100) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id            serial PRIMARY KEY,
        username      varchar(150) NOT NULL UNIQUE,
        email         varchar(255) NOT NULL UNIQUE,
        role          varchar(60)  NOT NULL,
        team_id       integer      NOT NULL REFERENCES teams (id),
        password_hash varchar(255) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS waste_entries (
        id        serial PRIMARY KEY,
        type      varchar(100)     NOT NULL,
        weight    double precision NOT NULL,
        timestamp timestamptz      NOT NULL,
        user_id   integer          NOT NULL REFERENCES users (id)
    )",
];

/// Name of the team seeded at bootstrap; its id is reserved by the
/// first run.
pub const BOOTSTRAP_TEAM_NAME: &str = "Admin";
pub const BOOTSTRAP_USERNAME: &str = "admin";
const BOOTSTRAP_EMAIL: &str = "admin@ecotrack.local";

/// Create the three tables if they do not exist yet.
pub async fn init_schema(pool: &PgPool) -> Result<(), StoreError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await.map_err(store_err)?;
    }
    info!("database schema ready");
    Ok(())
}

/// Seed the default admin team and user. Safe to run repeatedly —
/// existing rows are left untouched rather than raising.
pub async fn bootstrap(pool: &PgPool, admin_password: &str) -> EcotrackResult<()> {
    sqlx::query("INSERT INTO teams (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
        .bind(BOOTSTRAP_TEAM_NAME)
        .execute(pool)
        .await
        .map_err(store_err)?;

    let team_id: i32 = sqlx::query_scalar("SELECT id FROM teams WHERE name = $1")
        .bind(BOOTSTRAP_TEAM_NAME)
        .fetch_one(pool)
        .await
        .map_err(store_err)?;

    let password_hash = password::hash_password(admin_password)
        .map_err(|e| EcotrackError::Crypto(e.to_string()))?;

    sqlx::query(
        "INSERT INTO users (username, email, role, team_id, password_hash)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(BOOTSTRAP_USERNAME)
    .bind(BOOTSTRAP_EMAIL)
    .bind("Admin")
    .bind(team_id)
    .bind(&password_hash)
    .execute(pool)
    .await
    .map_err(store_err)?;

    info!(team_id, "bootstrap entities ensured");
    Ok(())
}
