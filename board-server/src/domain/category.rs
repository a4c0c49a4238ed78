//! Transport category resolution.
//!
//! ResRobot tags every product with a numeric category code. Only four of
//! them matter for the board; everything else collapses to `Unknown` and is
//! kept out of the display.

use std::fmt;

/// Vehicle mode of a departure, resolved from the ResRobot category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportCategory {
    /// Commuter and long-distance trains (catCode 4).
    Train,
    /// Metro / tunnelbana (catCode 5).
    Metro,
    /// Tram and light rail (catCode 6).
    Tram,
    /// Bus (catCode 7).
    Buss,
    /// Any category code outside the fixed table.
    Unknown,
}

impl TransportCategory {
    /// Resolve a raw category code.
    ///
    /// The table is closed: 4, 5, 6 and 7 are the only recognized codes,
    /// everything else is `Unknown`.
    pub fn from_cat_code(code: u32) -> Self {
        match code {
            4 => TransportCategory::Train,
            5 => TransportCategory::Metro,
            6 => TransportCategory::Tram,
            7 => TransportCategory::Buss,
            _ => TransportCategory::Unknown,
        }
    }

    /// Resolve a category code as it arrives on the wire.
    ///
    /// Anything that is not one of the four known numeric codes, including
    /// strings that are not numbers at all, is `Unknown`.
    pub fn from_raw_code(code: &str) -> Self {
        code.trim()
            .parse::<u32>()
            .map(Self::from_cat_code)
            .unwrap_or(TransportCategory::Unknown)
    }

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            TransportCategory::Train => "Train",
            TransportCategory::Metro => "Metro",
            TransportCategory::Tram => "Tram",
            TransportCategory::Buss => "Buss",
            TransportCategory::Unknown => "Unknown",
        }
    }

    /// Key used for the line badge color (lowercased category name).
    pub fn color_key(&self) -> &'static str {
        match self {
            TransportCategory::Train => "train",
            TransportCategory::Metro => "metro",
            TransportCategory::Tram => "tram",
            TransportCategory::Buss => "buss",
            TransportCategory::Unknown => "unknown",
        }
    }

    /// Static icon asset for the category.
    ///
    /// Buses and the metro get their own icons; the remaining rail modes
    /// share a default.
    pub fn icon_path(&self) -> &'static str {
        match self {
            TransportCategory::Buss => "/static/bus.svg",
            TransportCategory::Metro => "/static/metro.svg",
            _ => "/static/rail.svg",
        }
    }

    /// Whether this category belongs in the bus region of the board.
    pub fn is_bus(&self) -> bool {
        matches!(self, TransportCategory::Buss)
    }

    /// Whether this category belongs in the rail region of the board.
    pub fn is_rail(&self) -> bool {
        matches!(
            self,
            TransportCategory::Train | TransportCategory::Metro | TransportCategory::Tram
        )
    }
}

impl fmt::Display for TransportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
