//! Web layer for the departure board.
//!
//! Serves the board page rendered from the latest snapshot, plus the icon
//! assets and a health probe.

mod routes;
mod state;
pub mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::BoardTemplate;
