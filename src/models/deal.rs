//! Deal shapes. One table backs both the /pipelines CRUD surface and the
//! /analytics/deals reads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Deal {
    pub id: i64,
    pub deal_name: String,
    pub stage: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDeal {
    pub deal_name: String,
    #[serde(default = "default_stage")]
    pub stage: String,
    #[serde(default)]
    pub amount: f64,
}

fn default_stage() -> String {
    "prospecting".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealPatch {
    pub deal_name: Option<String>,
    pub stage: Option<String>,
    pub amount: Option<f64>,
}
