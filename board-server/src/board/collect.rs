//! The fetch-and-transform half of a cycle.
//!
//! One request per configured station, issued concurrently; the cycle waits
//! for all of them and the first failure aborts the whole batch. There is no
//! partial-success path: either every station contributes or the cycle
//! yields nothing.

use chrono::{DateTime, Utc};

use crate::config::StationConfig;
use crate::domain::{Departure, TransportCategory, minutes_until, strip_parenthetical};
use crate::resrobot::{DepartureSource, RawDeparture, ResRobotError};

use super::filter::DepartureFilter;

/// Normalize one raw record into a [`Departure`].
///
/// Returns `None` when the record cannot be normalized (non-numeric line,
/// unparseable departure instant). Such records could never pass the filter
/// anyway, so they are dropped rather than failing the cycle.
pub fn normalize(raw: &RawDeparture, station_name: &str, now: DateTime<Utc>) -> Option<Departure> {
    let line = raw.product.line.trim().parse().ok()?;
    let time_left = minutes_until(&raw.date, &raw.time, now).ok()?;

    Some(Departure {
        line,
        time: raw.time.clone(),
        time_left,
        station: station_name.to_string(),
        direction: strip_parenthetical(&raw.direction),
        category: TransportCategory::from_raw_code(&raw.product.cat_code),
    })
}

/// Fetch, normalize, filter and sort the departures of all stations.
///
/// The returned list is merged across stations and sorted ascending by
/// `time_left`. `now` is sampled once by the caller so every record in the
/// cycle shares the same reference instant.
pub async fn collect_board<S: DepartureSource>(
    source: &S,
    stations: &[StationConfig],
    filter: &DepartureFilter,
    now: DateTime<Utc>,
) -> Result<Vec<Departure>, ResRobotError> {
    let fetches = stations.iter().map(|station| async move {
        let raw = source.departures(&station.id.to_string()).await?;

        let departures: Vec<Departure> = raw
            .iter()
            .filter_map(|record| normalize(record, &station.name, now))
            .filter(|dep| filter.admits(dep, &station.displayed_departures))
            .collect();

        Ok::<_, ResRobotError>(departures)
    });

    let per_station = futures::future::try_join_all(fetches).await?;

    let mut merged: Vec<Departure> = per_station.into_iter().flatten().collect();
    merged.sort_by_key(|dep| dep.time_left);
    Ok(merged)
}
