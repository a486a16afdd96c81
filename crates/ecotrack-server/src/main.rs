//! ecotrack Server — application entry point.
//!
//! Initializes logging, connects the Postgres pool and the Redis
//! cache, ensures the schema and bootstrap entities exist, and stops.
//! HTTP routing is wired by the transport layer.

use std::env;

use tracing_subscriber::EnvFilter;

use ecotrack_db::{bootstrap, connect_pool, init_schema, CacheConfig, DbConfig, RedisCache};

fn env_or(key: &str, fallback: String) -> String {
    env::var(key).unwrap_or(fallback)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ecotrack=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("starting ecotrack server");

    let db_config = DbConfig {
        url: env_or("DATABASE_URL", DbConfig::default().url),
        ..DbConfig::default()
    };
    let pool = match connect_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "database connection failed");
            return;
        }
    };

    if let Err(e) = init_schema(&pool).await {
        tracing::error!(error = %e, "schema initialization failed");
        return;
    }

    let admin_password = env_or("ADMIN_INITIAL_PASSWORD", "admin".into());
    if let Err(e) = bootstrap(&pool, &admin_password).await {
        tracing::error!(error = %e, "bootstrap failed");
        return;
    }

    let cache_config = CacheConfig {
        url: env_or("REDIS_URL", CacheConfig::default().url),
    };
    if let Err(e) = RedisCache::connect(&cache_config).await {
        tracing::error!(error = %e, "cache connection failed");
        return;
    }

    tracing::info!("ecotrack core initialized");

    // TODO: mount the HTTP router (auth middleware + CRUD handlers)
    // once the transport layer lands.

    tracing::info!("ecotrack server stopped");
}
