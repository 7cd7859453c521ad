//! Module for decoding GPS positions from photo metadata tag maps.
pub mod error;
mod logic;
mod parsing;
mod structs;

pub use error::GpsDecodeError;
pub use logic::{get_gps_fix, try_get_gps_fix};
pub use structs::{GpsCoordinate, GpsFix};
