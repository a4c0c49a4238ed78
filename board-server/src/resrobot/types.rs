//! ResRobot API response DTOs.
//!
//! These types map directly to the ResRobot departure-board JSON responses.
//! The API is loose about scalar types (`line` and `catCode` arrive as JSON
//! strings or numbers depending on the product), so the numeric-ish fields
//! deserialize from either encoding.

use serde::{Deserialize, Deserializer};

/// Response from the departure-board endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureBoard {
    /// Upcoming departures. Omitted entirely when the board is empty.
    #[serde(rename = "Departure", default)]
    pub departures: Vec<RawDeparture>,
}

/// One API-shaped departure record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeparture {
    /// Product details for the vehicle serving this departure.
    #[serde(rename = "ProductAtStop")]
    pub product: ProductAtStop,

    /// Scheduled departure date, "YYYY-MM-DD".
    pub date: String,

    /// Scheduled departure time, "HH:MM:SS".
    pub time: String,

    /// Raw destination string, possibly with parenthetical suffixes.
    pub direction: String,
}

/// Product block of a departure record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductAtStop {
    /// Line identifier. Usually numeric, kept raw until the transform step.
    #[serde(default, deserialize_with = "string_or_number")]
    pub line: String,

    /// Provider category code for the vehicle mode.
    #[serde(rename = "catCode", default, deserialize_with = "string_or_number")]
    pub cat_code: String,
}

/// Accept a JSON string or number and normalize to a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
    })
}
