// Runtime configuration resolved from the environment

use std::env;

use tracing::info;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default content API base URL, a local stand-in for development.
const DEFAULT_CONTENT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address of the key-value credential store. Required.
    pub redis_url: String,
    pub bind_addr: String,
    pub content_api_url: String,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Result<Self, String> {
        let redis_url = env::var("REDIS_URL")
            .map_err(|_| "REDIS_URL environment variable is not set".to_string())?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let content_api_url =
            env::var("CONTENT_API_URL").unwrap_or_else(|_| DEFAULT_CONTENT_API_URL.to_string());

        info!(
            "Configuration loaded (bind {}, content API {})",
            bind_addr, content_api_url
        );

        Ok(Self {
            redis_url,
            bind_addr,
            content_api_url,
        })
    }
}
