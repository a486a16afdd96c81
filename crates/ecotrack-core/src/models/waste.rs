//! Waste entry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: i32,
    /// Free-form category label. Serialized as `type` for wire
    /// compatibility with previously cached entries.
    #[serde(rename = "type")]
    pub kind: String,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateWasteEntry {
    pub kind: String,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    pub user_id: i32,
}
