//! Departure instant parsing and countdown math.
//!
//! ResRobot provides the scheduled departure as separate `date`
//! ("YYYY-MM-DD") and `time` ("HH:MM:SS") strings in Swedish local time.
//! The board applies a fixed UTC+2 offset to turn them into an instant and
//! derives the whole-minute countdown from "now".

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Sentinel countdown value for a departure that has already left.
pub const DEPARTED: i64 = -1;

/// Fixed offset applied to raw date+time strings (UTC+2).
const UTC_OFFSET_SECS: i32 = 2 * 3600;

/// Error returned when a raw date or time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure instant: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a raw `date` + `time` pair into an instant, using the fixed offset.
pub fn departure_instant(date: &str, time: &str) -> Result<DateTime<Utc>, TimeError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimeError::new("expected YYYY-MM-DD date"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .map_err(|_| TimeError::new("expected HH:MM:SS time"))?;

    let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).expect("valid fixed offset");
    let local = date.and_time(time);

    // A fixed offset has no DST gaps, so the conversion is always unambiguous.
    local
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TimeError::new("ambiguous local datetime"))
}

/// Whole minutes between `now` and the departure at `date` + `time`.
///
/// Rounds down, so a departure 7 minutes 59 seconds away counts as 7.
/// A departure strictly before `now` is forced to [`DEPARTED`] (-1).
pub fn minutes_until(date: &str, time: &str, now: DateTime<Utc>) -> Result<i64, TimeError> {
    let departure = departure_instant(date, time)?;

    if departure < now {
        return Ok(DEPARTED);
    }

    Ok(departure.signed_duration_since(now).num_seconds() / 60)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, FixedOffset, TimeZone};
    use proptest::prelude::*;

    fn fmt_raw(at: DateTime<Utc>) -> (String, String) {
        let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).unwrap();
        let local = at.with_timezone(&offset);
        (
            local.format("%Y-%m-%d").to_string(),
            local.format("%H:%M:%S").to_string(),
        )
    }

    proptest! {
        /// A departure m minutes (plus sub-minute seconds) ahead counts as m.
        #[test]
        fn future_minutes_floor(mins in 0i64..14_000, secs in 0i64..60) {
            let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
            let (date, time) = fmt_raw(now + Duration::minutes(mins) + Duration::seconds(secs));
            prop_assert_eq!(minutes_until(&date, &time, now).unwrap(), mins);
        }

        /// Any strictly-past departure is the sentinel, no matter how recent.
        #[test]
        fn past_is_sentinel(secs in 1i64..1_000_000) {
            let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
            let (date, time) = fmt_raw(now - Duration::seconds(secs));
            prop_assert_eq!(minutes_until(&date, &time, now).unwrap(), DEPARTED);
        }
    }
}
