//! ResRobot departure-board HTTP client.
//!
//! Issues one GET per station against the departure-board endpoint and
//! decodes the JSON body into raw departure records. Authentication is a
//! plain `accessId` query parameter.

use std::future::Future;

use super::error::ResRobotError;
use super::types::{DepartureBoard, RawDeparture};

/// Default base URL for the ResRobot departure-board endpoint.
const DEFAULT_BASE_URL: &str = "https://api.resrobot.se/v2.1/departureBoard";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ResRobot client.
#[derive(Debug, Clone)]
pub struct ResRobotConfig {
    /// Access id for authentication
    pub access_id: String,
    /// Base URL for the API (defaults to the production endpoint)
    pub base_url: String,
    /// Lookahead window requested from the API, in minutes
    pub duration_mins: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResRobotConfig {
    /// Create a new config with the given access id and lookahead duration.
    pub fn new(access_id: impl Into<String>, duration_mins: u32) -> Self {
        Self {
            access_id: access_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            duration_mins,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a different deployment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Anything that can produce the raw departure list for a station.
///
/// The live [`ResRobotClient`] implements this against the real API; tests
/// use [`MockSource`](super::MockSource) to exercise the fetch cycle without
/// network access.
pub trait DepartureSource: Send + Sync {
    /// Fetch all upcoming departures for one station.
    fn departures(
        &self,
        station_id: &str,
    ) -> impl Future<Output = Result<Vec<RawDeparture>, ResRobotError>> + Send;
}

/// ResRobot departure-board API client.
#[derive(Debug, Clone)]
pub struct ResRobotClient {
    http: reqwest::Client,
    access_id: String,
    base_url: String,
    duration_mins: u32,
}

impl ResRobotClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ResRobotConfig) -> Result<Self, ResRobotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            access_id: config.access_id,
            base_url: config.base_url,
            duration_mins: config.duration_mins,
        })
    }
}

impl DepartureSource for ResRobotClient {
    async fn departures(&self, station_id: &str) -> Result<Vec<RawDeparture>, ResRobotError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("accessId", self.access_id.as_str()),
                ("format", "json"),
                ("id", station_id),
                ("duration", &self.duration_mins.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ResRobotError::Unauthorized);
        }

        if !status.is_success() {
            return Err(ResRobotError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response.text().await?;

        let board: DepartureBoard =
            serde_json::from_str(&body).map_err(|e| ResRobotError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(board.departures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = ResRobotConfig::new("test-key", 60)
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.access_id, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.duration_mins, 60);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = ResRobotConfig::new("test-key", 90);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation() {
        let config = ResRobotConfig::new("test-key", 60);
        assert!(ResRobotClient::new(config).is_ok());
    }
}
