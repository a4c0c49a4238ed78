//! Startup configuration.
//!
//! Everything here is loaded exactly once, before the first fetch cycle, and
//! is immutable afterwards. A missing or malformed value is fatal: the
//! process refuses to start rather than run with a partial configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Environment variable names, shared with deployment configs.
const ENV_BASE_URL: &str = "RESROBOT_API_BASE_URL";
const ENV_ACCESS_ID: &str = "RESROBOT_ACCESS_ID";
const ENV_UPDATE_FREQUENCY: &str = "UPDATE_FREQUENCY";
const ENV_API_DURATION: &str = "API_DURATION";

/// Fatal startup configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required configuration value {0} is missing")]
    Missing(&'static str),

    #[error("configuration value {key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("failed to read station config {path}: {message}")]
    Stations { path: String, message: String },
}

/// Top-level application configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the ResRobot departure-board endpoint.
    pub base_url: String,

    /// ResRobot access credential.
    pub access_id: String,

    /// How often to run a fetch cycle.
    pub update_frequency: Duration,

    /// Lookahead window requested from the API, in minutes.
    pub api_duration_mins: u32,
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    ///
    /// All four values are required; absence of any is a fatal error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(|key| std::env::var(key).ok())
    }

    fn build(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get(ENV_BASE_URL).ok_or(ConfigError::Missing(ENV_BASE_URL))?;
        let access_id = get(ENV_ACCESS_ID).ok_or(ConfigError::Missing(ENV_ACCESS_ID))?;

        let update_frequency_ms: u64 = get(ENV_UPDATE_FREQUENCY)
            .ok_or(ConfigError::Missing(ENV_UPDATE_FREQUENCY))?
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: ENV_UPDATE_FREQUENCY,
                reason: "expected milliseconds as a whole number".to_string(),
            })?;

        let api_duration_mins: u32 = get(ENV_API_DURATION)
            .ok_or(ConfigError::Missing(ENV_API_DURATION))?
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: ENV_API_DURATION,
                reason: "expected minutes as a whole number".to_string(),
            })?;

        Ok(Self {
            base_url,
            access_id,
            update_frequency: Duration::from_millis(update_frequency_ms),
            api_duration_mins,
        })
    }
}

/// Static per-station configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationConfig {
    /// Display name shown on the board.
    pub name: String,

    /// Provider station id, embedded in the request URL.
    pub id: u64,

    /// Line numbers allowed on the board for this station.
    #[serde(rename = "displayedDepartures")]
    pub displayed_departures: Vec<u32>,
}

/// Parse a station list from its JSON text.
pub fn parse_stations(json: &str) -> Result<Vec<StationConfig>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the station list from a JSON file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<StationConfig>, ConfigError> {
    let path = path.as_ref();
    let stations_err = |message: String| ConfigError::Stations {
        path: path.display().to_string(),
        message,
    };

    let json = std::fs::read_to_string(path).map_err(|e| stations_err(e.to_string()))?;
    parse_stations(&json).map_err(|e| stations_err(e.to_string()))
}
