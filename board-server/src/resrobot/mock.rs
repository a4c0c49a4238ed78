//! Mock departure source for testing without API access.
//!
//! Serves canned boards keyed by station id, and can be told to fail for
//! specific stations to exercise the whole-cycle abort behavior.

use std::collections::HashMap;

use super::client::DepartureSource;
use super::error::ResRobotError;
use super::types::RawDeparture;

/// In-memory [`DepartureSource`] with per-station canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    boards: HashMap<String, Vec<RawDeparture>>,
    failures: HashMap<String, u16>,
}

impl MockSource {
    /// Create an empty mock. Unknown stations serve an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given departures for a station.
    pub fn with_board(mut self, station_id: impl Into<String>, deps: Vec<RawDeparture>) -> Self {
        self.boards.insert(station_id.into(), deps);
        self
    }

    /// Fail requests for a station with the given HTTP status.
    pub fn with_failure(mut self, station_id: impl Into<String>, status: u16) -> Self {
        self.failures.insert(station_id.into(), status);
        self
    }
}

impl DepartureSource for MockSource {
    async fn departures(&self, station_id: &str) -> Result<Vec<RawDeparture>, ResRobotError> {
        if let Some(&status) = self.failures.get(station_id) {
            return Err(ResRobotError::Api {
                status,
                message: "mock failure".to_string(),
            });
        }

        Ok(self.boards.get(station_id).cloned().unwrap_or_default())
    }
}
