//! Destination name cleaning.
//!
//! ResRobot destination strings often carry parenthetical suffixes such as
//! "Akalla T-bana (via Kista)". The board shows only the bare destination,
//! and the destination exclusion filter compares against the cleaned form.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a parenthetical segment plus any whitespace directly before it.
/// Non-greedy, so "A (x) B (y)" loses both segments independently.
fn parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(.*?\)").expect("valid regex"))
}

/// Remove every parenthetical segment (and the whitespace leading into it).
pub fn strip_parenthetical(direction: &str) -> String {
    parenthetical().replace_all(direction, "").into_owned()
}
