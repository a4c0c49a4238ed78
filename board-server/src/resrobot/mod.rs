//! ResRobot departure-board API client.
//!
//! This module provides an HTTP client for the ResRobot public transit API,
//! which serves upcoming departures per station.
//!
//! Key characteristics of the API:
//! - Authentication is a plain `accessId` query parameter
//! - Scheduled times arrive as separate `date` and `time` strings in
//!   Swedish local time
//! - An empty board omits the `Departure` array instead of sending `[]`
//! - Scalar fields switch between JSON strings and numbers per product

mod client;
mod error;
mod mock;
mod types;

pub use client::{DepartureSource, ResRobotClient, ResRobotConfig};
pub use error::ResRobotError;
pub use mock::MockSource;
pub use types::{DepartureBoard, ProductAtStop, RawDeparture};
