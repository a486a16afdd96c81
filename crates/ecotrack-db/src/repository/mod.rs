//! Repository implementations.
//!
//! Three parallel stacks behind the `ecotrack-core` traits: direct
//! Postgres repositories, in-memory repositories (tests and local
//! development), and caching decorators that wrap either of the
//! former.

mod cached;
mod memory;
mod team;
mod user;
mod waste;

pub use cached::{CachedTeamRepository, CachedUserRepository, CachedWasteRepository};
pub use memory::{MemoryTeamRepository, MemoryUserRepository, MemoryWasteRepository};
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
pub use waste::PgWasteRepository;
