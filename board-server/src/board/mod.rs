//! The fetch → transform → filter → sort → render pipeline.
//!
//! One cycle turns "now plus static config" into a fresh [`BoardView`];
//! there is no state carried between cycles beyond the snapshot itself.

mod collect;
mod filter;
mod snapshot;
mod view;

pub use collect::{collect_board, normalize};
pub use filter::{DepartureFilter, EXCLUDED_DESTINATION, MIN_TIME_DIFFERENCE};
pub use snapshot::{BoardSnapshot, refresh_snapshot};
pub use view::{BoardLayout, BoardView, DepartureRow, URGENT_THRESHOLD_MINS};
