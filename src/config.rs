use crate::error::AppError;
use meetup_raffle::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured draw endpoint
pub const ENDPOINT_ENV: &str = "RAFFLE_API_ENDPOINT";

/// Application settings read from `raffle.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the config file if present; a missing file means defaults
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads config file and environment; problems are logged and defaults used
    pub fn load() -> Self {
        let path = config_path();
        let mut config = Self::from_file(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", path.display(), e);
            Self::default()
        });
        config.apply_env_override(std::env::var(ENDPOINT_ENV).ok());
        log::info!("Using draw endpoint {}", config.api_endpoint);
        config
    }

    fn apply_env_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.api_endpoint = endpoint.trim().to_string();
        }
    }
}

/// Location of the config file next to the database
pub fn config_path() -> PathBuf {
    crate::database::get_data_directory().join("raffle.toml")
}
