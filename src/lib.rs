//! CRM/project-management REST backend over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AllowedOrigins, Settings};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::router;
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
