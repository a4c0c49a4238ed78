//! Board view construction.
//!
//! Partitions the sorted departure list into the two display regions,
//! truncates each to its configured row budget, and precomputes the
//! per-row presentation details the template needs.

use crate::domain::Departure;

/// Minutes-left value at or below which a row is flagged as urgent.
pub const URGENT_THRESHOLD_MINS: i64 = 10;

/// Row budget per display region.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    /// Maximum rows in the bus region.
    pub max_bus_rows: usize,

    /// Maximum rows in the rail region.
    pub max_rail_rows: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            max_bus_rows: 5,
            max_rail_rows: 5,
        }
    }
}

/// One rendered row of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRow {
    /// Icon asset path for the vehicle mode.
    pub icon: &'static str,

    /// Line number shown on the badge.
    pub line: u32,

    /// Badge color key (lowercased category name).
    pub badge: &'static str,

    /// Departure time, truncated to "HH:MM".
    pub time: String,

    /// Station display name.
    pub station: String,

    /// Cleaned destination.
    pub direction: String,

    /// Minutes until departure.
    pub minutes_left: i64,

    /// Whether the countdown is at or under the urgency threshold.
    pub urgent: bool,
}

impl DepartureRow {
    fn from_departure(dep: &Departure) -> Self {
        Self {
            icon: dep.category.icon_path(),
            line: dep.line,
            badge: dep.category.color_key(),
            time: dep.display_time().to_string(),
            station: dep.station.clone(),
            direction: dep.direction.clone(),
            minutes_left: dep.time_left,
            urgent: dep.time_left <= URGENT_THRESHOLD_MINS,
        }
    }
}

/// The fully rendered board: bus rows and rail rows.
///
/// Built from scratch every cycle and swapped in wholesale; there is no
/// incremental diffing against the previous view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Rows for the bus region.
    pub bus: Vec<DepartureRow>,

    /// Rows for the rail region (train, metro, tram).
    pub rail: Vec<DepartureRow>,
}

impl BoardView {
    /// Build the view from a time-sorted departure list.
    ///
    /// `Unknown` categories appear in neither region. Because the input is
    /// already sorted ascending by `time_left`, truncation keeps the rows
    /// with the smallest countdowns.
    pub fn build(departures: &[Departure], layout: &BoardLayout) -> Self {
        let bus = departures
            .iter()
            .filter(|dep| dep.category.is_bus())
            .take(layout.max_bus_rows)
            .map(DepartureRow::from_departure)
            .collect();

        let rail = departures
            .iter()
            .filter(|dep| dep.category.is_rail())
            .take(layout.max_rail_rows)
            .map(DepartureRow::from_departure)
            .collect();

        Self { bus, rail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportCategory;

    fn departure(line: u32, time_left: i64, category: TransportCategory) -> Departure {
        Departure {
            line,
            time: "12:34:00".to_string(),
            time_left,
            station: "Solna station".to_string(),
            direction: "Ropsten".to_string(),
            category,
        }
    }

    #[test]
    fn partitions_by_mode() {
        let departures = vec![
            departure(540, 9, TransportCategory::Buss),
            departure(41, 12, TransportCategory::Train),
            departure(14, 15, TransportCategory::Metro),
            departure(30, 18, TransportCategory::Tram),
        ];

        let view = BoardView::build(&departures, &BoardLayout::default());

        assert_eq!(view.bus.len(), 1);
        assert_eq!(view.bus[0].line, 540);

        let rail_lines: Vec<u32> = view.rail.iter().map(|r| r.line).collect();
        assert_eq!(rail_lines, vec![41, 14, 30]);
    }

    #[test]
    fn unknown_category_is_displayed_nowhere() {
        let departures = vec![
            departure(99, 20, TransportCategory::Unknown),
            departure(540, 25, TransportCategory::Buss),
        ];

        let view = BoardView::build(&departures, &BoardLayout::default());

        assert_eq!(view.bus.len(), 1);
        assert!(view.rail.is_empty());
    }

    #[test]
    fn truncates_to_soonest_rows() {
        // Eight qualifying bus departures, already sorted by time_left
        let departures: Vec<Departure> = (0..8)
            .map(|i| departure(500 + i, 8 + i as i64, TransportCategory::Buss))
            .collect();

        let view = BoardView::build(&departures, &BoardLayout::default());

        assert_eq!(view.bus.len(), 5);
        let minutes: Vec<i64> = view.bus.iter().map(|r| r.minutes_left).collect();
        assert_eq!(minutes, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn regions_truncate_independently() {
        let mut departures = Vec::new();
        for i in 0..4 {
            departures.push(departure(100 + i, 8 + i as i64, TransportCategory::Buss));
        }
        for i in 0..7 {
            departures.push(departure(200 + i, 8 + i as i64, TransportCategory::Metro));
        }
        departures.sort_by_key(|d| d.time_left);

        let layout = BoardLayout {
            max_bus_rows: 2,
            max_rail_rows: 6,
        };
        let view = BoardView::build(&departures, &layout);

        assert_eq!(view.bus.len(), 2);
        assert_eq!(view.rail.len(), 6);
    }

    #[test]
    fn urgency_flag_at_threshold() {
        let departures = vec![
            departure(1, 10, TransportCategory::Buss),
            departure(2, 11, TransportCategory::Buss),
        ];

        let view = BoardView::build(&departures, &BoardLayout::default());

        assert!(view.bus[0].urgent);
        assert!(!view.bus[1].urgent);
    }

    #[test]
    fn row_presentation_fields() {
        let view = BoardView::build(
            &[departure(14, 15, TransportCategory::Metro)],
            &BoardLayout::default(),
        );

        let row = &view.rail[0];
        assert_eq!(row.time, "12:34");
        assert_eq!(row.badge, "metro");
        assert_eq!(row.icon, "/static/metro.svg");
        assert_eq!(row.station, "Solna station");
        assert_eq!(row.direction, "Ropsten");
    }
}
