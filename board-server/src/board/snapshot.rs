//! The shared board snapshot and the cycle that replaces it.
//!
//! One snapshot is shared between the refresh driver and the web layer.
//! A successful cycle swaps the whole snapshot (last-writer-wins); a failed
//! cycle leaves the previous one on display untouched.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::StationConfig;
use crate::resrobot::{DepartureSource, ResRobotError};

use super::collect::collect_board;
use super::filter::DepartureFilter;
use super::view::{BoardLayout, BoardView};

/// The latest successfully rendered board.
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    /// Rendered rows, both regions.
    pub view: BoardView,

    /// When the view was produced. `None` until the first successful cycle.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Run one full fetch → transform → render cycle against `snapshot`.
///
/// Only a fully successful cycle touches the snapshot. Any fetch or decode
/// error propagates to the caller with the previous view still in place.
pub async fn refresh_snapshot<S: DepartureSource>(
    source: &S,
    stations: &[StationConfig],
    filter: &DepartureFilter,
    layout: &BoardLayout,
    snapshot: &RwLock<BoardSnapshot>,
) -> Result<(), ResRobotError> {
    let now = Utc::now();
    let departures = collect_board(source, stations, filter, now).await?;
    let view = BoardView::build(&departures, layout);

    let mut guard = snapshot.write().await;
    *guard = BoardSnapshot {
        view,
        updated_at: Some(now),
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resrobot::{MockSource, ProductAtStop, RawDeparture};
    use chrono::{Duration, FixedOffset};

    /// Raw record departing `mins` minutes from the wall clock.
    fn raw(line: &str, cat_code: &str, mins: i64) -> RawDeparture {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = (Utc::now() + Duration::minutes(mins)).with_timezone(&offset);
        RawDeparture {
            product: ProductAtStop {
                line: line.to_string(),
                cat_code: cat_code.to_string(),
            },
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M:%S").to_string(),
            direction: "Ropsten".to_string(),
        }
    }

    fn stations() -> Vec<StationConfig> {
        vec![
            StationConfig {
                name: "Solna station".to_string(),
                id: 740000001,
                displayed_departures: vec![540],
            },
            StationConfig {
                name: "Huvudsta".to_string(),
                id: 740000002,
                displayed_departures: vec![540],
            },
        ]
    }

    #[tokio::test]
    async fn successful_cycle_replaces_snapshot() {
        let source = MockSource::new()
            .with_board("740000001", vec![raw("540", "7", 30)])
            .with_board("740000002", vec![raw("540", "7", 20)]);
        let snapshot = RwLock::new(BoardSnapshot::default());

        refresh_snapshot(
            &source,
            &stations(),
            &DepartureFilter::default(),
            &BoardLayout::default(),
            &snapshot,
        )
        .await
        .unwrap();

        let guard = snapshot.read().await;
        assert_eq!(guard.view.bus.len(), 2);
        assert!(guard.updated_at.is_some());
    }

    #[tokio::test]
    async fn failed_cycle_leaves_previous_view() {
        // First cycle: both stations healthy
        let healthy = MockSource::new()
            .with_board("740000001", vec![raw("540", "7", 30)])
            .with_board("740000002", vec![raw("540", "7", 20)]);
        let snapshot = RwLock::new(BoardSnapshot::default());

        refresh_snapshot(
            &healthy,
            &stations(),
            &DepartureFilter::default(),
            &BoardLayout::default(),
            &snapshot,
        )
        .await
        .unwrap();

        let before = snapshot.read().await.clone();
        assert_eq!(before.view.bus.len(), 2);

        // Second cycle: station B answers 500 while A still has fresh data.
        // The whole update is suppressed, not partially applied.
        let degraded = MockSource::new()
            .with_board("740000001", vec![raw("540", "7", 9)])
            .with_failure("740000002", 500);

        let result = refresh_snapshot(
            &degraded,
            &stations(),
            &DepartureFilter::default(),
            &BoardLayout::default(),
            &snapshot,
        )
        .await;
        assert!(result.is_err());

        let after = snapshot.read().await;
        assert_eq!(after.view, before.view);
        assert_eq!(after.updated_at, before.updated_at);
    }
}
