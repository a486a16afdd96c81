//! Team domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Assigned by the store on creation.
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub name: String,
}
