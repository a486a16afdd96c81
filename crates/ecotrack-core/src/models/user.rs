//! User domain model.

use serde::{Deserialize, Serialize};

/// The three-tier role model. Serialized form matches the stored and
/// token wire values (`"Employee"`, `"Manager"`, `"Admin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    /// Parse a stored role string. Unknown values are rejected, so no
    /// permission lookup can ever succeed for an unrecognized role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Employee" => Some(Role::Employee),
            "Manager" => Some(Role::Manager),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Every user belongs to exactly one team. `password_hash` is only
/// ever set through [`crate::password::hash_password`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub team_id: i32,
    pub password_hash: String,
}

/// Repository input for user creation. The password arrives already
/// hashed — the service layer owns the hashing step.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub team_id: i32,
    pub password_hash: String,
}
