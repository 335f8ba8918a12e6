//! Settings loaded once from the environment and passed into composition.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Cross-origin allow-list. A `*` anywhere in `ALLOWED_ORIGINS` means any
/// origin, which disables credentialed requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated allow-list. Entries are trimmed, empties skipped.
    pub fn parse(raw: &str) -> Self {
        let list: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if list.iter().any(|origin| origin == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(list)
        }
    }

    /// Origins as shown in the root info response.
    pub fn display_list(&self) -> Vec<String> {
        match self {
            AllowedOrigins::Any => vec!["*".to_string()],
            AllowedOrigins::List(list) => list.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_url: String,
    pub allowed_origins: AllowedOrigins,
}

impl Settings {
    /// Read settings from the environment, with local-development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/crm".into());
        let bind_raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw,
        })?;
        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());
        let allowed_origins = AllowedOrigins::parse(
            &std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into()),
        );
        Ok(Settings {
            database_url,
            bind_addr,
            frontend_url,
            allowed_origins,
        })
    }
}
