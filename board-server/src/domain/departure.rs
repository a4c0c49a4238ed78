//! The normalized departure record.

use super::category::TransportCategory;

/// One upcoming departure, normalized from the raw API shape.
///
/// Built fresh every fetch cycle and never mutated afterwards; the board has
/// no cross-cycle identity for departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Numeric line identifier (e.g. 540).
    pub line: u32,

    /// Scheduled departure time as "HH:MM:SS", straight from the API.
    pub time: String,

    /// Whole minutes until departure, relative to "now" at fetch time.
    /// [`DEPARTED`](super::time::DEPARTED) (-1) if the departure is already gone.
    pub time_left: i64,

    /// Display name of the station this departure leaves from.
    pub station: String,

    /// Destination with parenthetical suffixes stripped.
    pub direction: String,

    /// Vehicle mode, resolved from the raw category code.
    pub category: TransportCategory,
}

impl Departure {
    /// Departure time truncated to "HH:MM" for display.
    pub fn display_time(&self) -> &str {
        self.time.get(..5).unwrap_or(&self.time)
    }
}
