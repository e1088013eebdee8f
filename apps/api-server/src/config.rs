//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path to the flat JSON post file. Unset means in-memory storage.
    pub storage_path: Option<PathBuf>,
    /// Quota for list/search requests, per client per route.
    pub read_limit_per_minute: u32,
    /// Quota for create/update/delete requests, per client per route.
    pub write_limit_per_minute: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage_path: env::var("STORAGE_PATH").ok().map(PathBuf::from),
            read_limit_per_minute: env::var("RATE_LIMIT_READ_PER_MINUTE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            write_limit_per_minute: env::var("RATE_LIMIT_WRITE_PER_MINUTE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
