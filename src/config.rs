//! Application configuration.
//!
//! Settings come from environment variables with documented defaults, or
//! from a TOML file when `DAYLIGHT_CONFIG` points at one. Every field has a
//! default so a bare `daylight-server` start works out of the box.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid environment variable {name}: {value}")]
    Env { name: &'static str, value: String },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Geocoding client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingSettings {
    /// Base URL of the Open-Meteo-compatible geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// ISO country code accepted matches must carry
    #[serde(default = "default_country_code")]
    pub country_code: String,
    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,
}

/// Chart composition limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Maximum number of concurrent city series per chart
    #[serde(default = "default_max_series")]
    pub max_series: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_country_code() -> String {
    "FI".to_string()
}

fn default_geocoding_timeout() -> u64 {
    20
}

fn default_max_series() -> usize {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            country_code: default_country_code(),
            timeout_secs: default_geocoding_timeout(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_series: default_max_series(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Reads the TOML file named by `DAYLIGHT_CONFIG` when set, otherwise
    /// falls back to individual environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var("DAYLIGHT_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): server bind host
    /// - `PORT` (optional, default: 8080): server bind port
    /// - `GEOCODING_BASE_URL` (optional): geocoding API base URL
    /// - `GEOCODING_COUNTRY` (optional, default: FI): accepted country code
    /// - `GEOCODING_TIMEOUT_SECS` (optional, default: 20): request timeout
    /// - `MAX_CITIES` (optional, default: 10): concurrent series cap
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ConfigError::Env {
                    name: "PORT",
                    value: port.clone(),
                })?;
        }
        if let Ok(url) = env::var("GEOCODING_BASE_URL") {
            config.geocoding.base_url = url;
        }
        if let Ok(country) = env::var("GEOCODING_COUNTRY") {
            config.geocoding.country_code = country;
        }
        if let Ok(timeout) = env::var("GEOCODING_TIMEOUT_SECS") {
            config.geocoding.timeout_secs = timeout
                .parse()
                .map_err(|_| ConfigError::Env {
                    name: "GEOCODING_TIMEOUT_SECS",
                    value: timeout.clone(),
                })?;
        }
        if let Ok(max) = env::var("MAX_CITIES") {
            config.chart.max_series = max
                .parse()
                .map_err(|_| ConfigError::Env {
                    name: "MAX_CITIES",
                    value: max.clone(),
                })?;
        }

        Ok(config)
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
