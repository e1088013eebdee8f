//! Proxy configuration loaded from environment variables.

use std::env;

/// Proxy configuration.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    /// Full URL of the backend posts endpoint.
    pub backend_api_url: String,
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            backend_api_url: env::var("BACKEND_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/api/posts".to_string()),
        }
    }
}
