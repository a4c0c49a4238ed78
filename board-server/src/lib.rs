//! ResRobot departure board server.
//!
//! Polls the ResRobot departure API for a fixed set of stations on a timer
//! and serves the next upcoming departures as a two-region board
//! (buses on one side, rail on the other).

pub mod board;
pub mod config;
pub mod domain;
pub mod resrobot;
pub mod web;
