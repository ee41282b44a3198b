use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::finnhub::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Finnhub token. `None` when unset or empty; requests then fail.
    pub api_key: Option<String>,
    pub finnhub_base_url: String,
    pub bind_address: String,
    pub port: u16,
    /// Directory for the threshold record. In-memory when `None`.
    pub store_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// # Parameters
    /// - `lookup`: Returns the value of an environment variable, if set.
    ///
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port: u16 = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            api_key: non_empty("FINNHUB_API_KEY"),
            finnhub_base_url: non_empty("FINNHUB_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_address: non_empty("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            store_dir: non_empty("TRACKER_STORE_DIR").map(PathBuf::from),
        })
    }
}
