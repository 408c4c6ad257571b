//! Application configuration

use std::env;

/// Pub/Sub caps messages at 10MB, so push bodies never legitimately
/// exceed this.
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the endpoint listens on (Cloud Run sets `PORT`)
    pub port: u16,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),

            max_body_bytes: env::var("PUSH_ENDPOINT_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }
}
