//! Askama templates for the board page.

use askama::Template;

use crate::board::DepartureRow;

/// The departure board page: a bus region and a rail region.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    /// Rows for the bus table body.
    pub bus: Vec<DepartureRow>,

    /// Rows for the rail table body.
    pub rail: Vec<DepartureRow>,

    /// When the board was last refreshed, already formatted. Empty until the
    /// first successful cycle.
    pub updated: Option<String>,
}
