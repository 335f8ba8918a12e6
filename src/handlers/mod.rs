//! HTTP handlers for entity CRUD and analytics reads.

pub mod activity;
pub mod analytics;
pub mod company;
pub mod contact;
pub mod deal;
pub mod lead;
