//! # API Configuration Module
//!
//! Loads server settings from environment variables with defaults matching
//! the renderer's expectations: the generator HTML is hardcoded to reach
//! the config API at `http://127.0.0.1:5555`.
//!
//! ## Environment Variables
//!
//! - `SCHEDCAST_HOST`: bind address (default: "127.0.0.1")
//! - `SCHEDCAST_PORT`: listen port (default: 5555)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `SCHEDCAST_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the schedcast API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SCHEDCAST_PORT` cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("SCHEDCAST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SCHEDCAST_PORT")
            .unwrap_or_else(|_| "5555".to_string())
            .parse()
            .wrap_err("Invalid SCHEDCAST_PORT value")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Performance settings
        let request_timeout = env::var("SCHEDCAST_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            log_level,
            request_timeout,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:5555").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
