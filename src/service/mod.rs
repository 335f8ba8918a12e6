//! Persistence layer: one service per entity, one query per call.

mod activity;
mod analytics;
mod company;
mod contact;
mod deal;
mod lead;
pub mod validation;

pub use activity::ActivityService;
pub use analytics::AnalyticsService;
pub use company::CompanyService;
pub use contact::ContactService;
pub use deal::DealService;
pub use lead::LeadService;
