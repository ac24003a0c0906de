//! Configuration management for flightscribe.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightscribe";

/// Default AeroDataBox endpoint on RapidAPI.
const DEFAULT_BASE_URL: &str = "https://aerodatabox.p.rapidapi.com";

/// Default value of the `x-rapidapi-host` header.
const DEFAULT_API_HOST: &str = "aerodatabox.p.rapidapi.com";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. `AERODATA_API_KEY` / `AERODATA_HOST` environment variables
/// 2. Environment variables prefixed with `FLIGHTSCRIBE_` (nested with `__`)
/// 3. TOML config file at `~/.config/flightscribe/config.toml`
/// 4. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote flight-data API configuration.
    pub api: ApiConfig,
    /// Static fallback table configuration.
    pub fallback: FallbackConfig,
}

/// Remote flight-data API configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Query the remote API at all.
    pub enabled: bool,
    /// Base URL of the API, without a trailing path.
    pub base_url: String,
    /// Value sent in the `x-rapidapi-host` header.
    pub host: String,
    /// Value sent in the `x-rapidapi-key` header.
    /// Without a key the remote source is skipped.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Static fallback table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Consult the compiled-in table when the API yields nothing.
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FLIGHTSCRIBE_").split("__"))
            .merge(
                Env::raw()
                    .only(&["AERODATA_API_KEY"])
                    .map(|_| "api.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["AERODATA_HOST"])
                    .map(|_| "api.host".into()),
            );

        Self::from_figment(&figment)
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or
    /// fails validation.
    pub fn check_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::config_validation(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Extract and validate configuration from a prepared figment.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(Error::config_validation(
                "api.timeout_secs must be greater than 0",
            ));
        }

        let base_url = Url::parse(&self.api.base_url).map_err(|e| {
            Error::config_validation(format!(
                "api.base_url is not a valid URL ({}): {e}",
                self.api.base_url
            ))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config_validation(format!(
                "api.base_url must start with http:// or https:// (got {})",
                self.api.base_url
            )));
        }

        if self.api.host.trim().is_empty() {
            return Err(Error::config_validation("api.host cannot be empty"));
        }

        Ok(())
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Check whether an API key is available.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
