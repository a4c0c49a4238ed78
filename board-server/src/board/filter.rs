//! Departure admission rules.
//!
//! Dropping a departure here is ordinary filtering, never an error: records
//! that are too soon, head to the excluded destination, or run on a line the
//! station does not display simply never reach the board.

use crate::domain::Departure;

/// Minimum minutes until departure for a record to be worth displaying.
/// Anything closer than this cannot realistically be caught.
pub const MIN_TIME_DIFFERENCE: i64 = 8;

/// Destination excluded from the board outright.
pub const EXCLUDED_DESTINATION: &str = "Akalla T-bana";

/// Filter applied to every normalized departure.
#[derive(Debug, Clone)]
pub struct DepartureFilter {
    /// Minimum `time_left` (minutes) a departure must have.
    pub min_minutes: i64,

    /// Literal destination that is never displayed. Compared against the
    /// cleaned direction, after parenthetical stripping.
    pub excluded_destination: String,
}

impl Default for DepartureFilter {
    fn default() -> Self {
        Self {
            min_minutes: MIN_TIME_DIFFERENCE,
            excluded_destination: EXCLUDED_DESTINATION.to_string(),
        }
    }
}

impl DepartureFilter {
    /// Whether a departure passes all three conditions: far enough out, not
    /// the excluded destination, and on one of the station's allowed lines.
    pub fn admits(&self, departure: &Departure, allowed_lines: &[u32]) -> bool {
        departure.time_left >= self.min_minutes
            && departure.direction != self.excluded_destination
            && allowed_lines.contains(&departure.line)
    }
}
