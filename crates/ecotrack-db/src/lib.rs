//! ecotrack Database — Postgres connection pooling, schema and
//! bootstrap, the key-value cache collaborator, and repository
//! implementations (Postgres, in-memory, and caching decorators).

pub mod cache;
mod connection;
mod error;
pub mod repository;
mod schema;

pub use cache::{Cache, CacheConfig, MemoryCache, RedisCache};
pub use connection::{connect_pool, DbConfig};
pub use schema::{bootstrap, init_schema, BOOTSTRAP_TEAM_NAME, BOOTSTRAP_USERNAME};
