//! Aggregation row shapes for the analytics endpoints.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RoleCount {
    pub role: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthCount {
    /// First day of the month, `YYYY-MM-DD`.
    pub month: String,
    pub count: i64,
}
