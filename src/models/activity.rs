//! Activity shapes. `contact_id` is an optional reference to the contact the
//! activity belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub activity_type: String,
    pub description: Option<String>,
    pub contact_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub activity_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPatch {
    pub activity_type: Option<String>,
    pub description: Option<String>,
    pub contact_id: Option<i64>,
}
