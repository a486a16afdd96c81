//! ecotrack Core — domain models, role/permission model, password
//! hashing, repository trait definitions, and entity services.

pub mod error;
pub mod models;
pub mod password;
pub mod permissions;
pub mod repository;
pub mod service;

pub use error::{EcotrackError, EcotrackResult, StoreError};
