//! Core domain types for the departure board.
//!
//! Everything here is pure: category resolution, countdown math and
//! destination cleaning have no I/O and are exercised heavily by the
//! transform pipeline in [`crate::board`].

mod category;
mod departure;
mod direction;
mod time;

pub use category::TransportCategory;
pub use departure::Departure;
pub use direction::strip_parenthetical;
pub use time::{DEPARTED, TimeError, departure_instant, minutes_until};
