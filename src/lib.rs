//! Depot battery and fleet vehicle charging model with financing arithmetic.

/// Weekly availability grids derived from schedules.
pub mod availability;
pub mod cli;
pub mod config;
pub mod devices;
pub mod finance;
pub mod io;
pub mod logging;
