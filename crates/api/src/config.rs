//! # API Configuration Module
//!
//! Loads the OpenHours server configuration from environment variables,
//! falling back to defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins, or `*`
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `LOCATIONS_DATA_PATH`: JSON catalog file (default: "data/locations.json")
//! - `LOCATIONS_CSV_PATH`: CSV file used by the import endpoint (default: "data/locations.csv")
//! - `SEARCH_API_KEY`: Subscription key for the web search proxy; search is disabled when unset
//! - `SEARCH_API_BASE_URL`: Web search API base URL
//! - `SEARCH_API_TIMEOUT_SECONDS`: Timeout for web search calls (default: 10)

use eyre::{Result, WrapErr};
use std::{env, path::PathBuf};
use tracing::Level;

use crate::search::DEFAULT_BASE_URL;

/// Configuration for the OpenHours API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use openhours_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Location catalog file
    pub data_path: PathBuf,

    /// CSV file read by `POST /api/import/csv`
    pub csv_path: PathBuf,

    /// Web search subscription key (optional)
    pub search_api_key: Option<String>,

    pub search_base_url: String,

    pub search_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        // Storage settings
        let data_path = lookup("LOCATIONS_DATA_PATH")
            .unwrap_or_else(|| "data/locations.json".to_string())
            .into();
        let csv_path = lookup("LOCATIONS_CSV_PATH")
            .unwrap_or_else(|| "data/locations.csv".to_string())
            .into();

        // Web search settings
        let search_api_key = lookup("SEARCH_API_KEY").filter(|key| !key.trim().is_empty());
        let search_base_url =
            lookup("SEARCH_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let search_timeout = lookup("SEARCH_API_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            data_path,
            csv_path,
            search_api_key,
            search_base_url,
            search_timeout,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
