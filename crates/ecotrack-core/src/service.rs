//! Entity services.
//!
//! Thin orchestration over the repository traits: input validation,
//! referenced-entity existence checks, and password hashing. Generic
//! over repository implementations so the service layer has no
//! dependency on the database crate.

pub mod team;
pub mod user;
pub mod waste;

pub use team::TeamService;
pub use user::{NewUser, UserService};
pub use waste::{NewWasteEntry, WasteService};
