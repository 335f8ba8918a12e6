//! Lead shapes. `updated_at` is stamped by the persistence layer on every
//! successful update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLead {
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
}

fn default_status() -> String {
    "new".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
}
