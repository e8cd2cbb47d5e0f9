//! Domain types for the station lookup service.
//!
//! Station records are loaded once and never mutated afterwards, so the
//! types here are plain data with a few accessors.

mod station;

pub use station::{BARE_CODE_LEN, Coordinates, LocalizedName, StationId, StationRecord};
