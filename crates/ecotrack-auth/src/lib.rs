//! ecotrack Auth — token issuance/verification, credential
//! authentication, and role-based authorization with ownership
//! refinements.

pub mod authorize;
pub mod config;
pub mod error;
pub mod service;
pub mod token;

pub use authorize::{AuthorizationService, RequestScope};
pub use config::AuthConfig;
pub use error::{AuthError, AuthzError, TokenError};
pub use service::AuthService;
pub use token::Claims;
