//! Domain models.

pub mod identity;
pub mod team;
pub mod user;
pub mod waste;

pub use identity::Identity;
pub use team::{CreateTeam, Team};
pub use user::{CreateUser, Role, User};
pub use waste::{CreateWasteEntry, WasteEntry};
