//! # Exifmap
//!
//! Extract GPS positions from photo metadata and manage a set of named map
//! markers.
//!
//! This crate provides the core of a photo-mapping tool: it decodes the GPS
//! block embedded in a photo's Exif data into signed decimal degrees, and
//! keeps a user-curated, ordered list of named markers with duplicate-aware
//! inserts and a JSON persistence format.
//!
//! ## Key Features
//!
//! - **GPS Decoding**: Converts sexagesimal degree/minute/second rationals
//!   with hemisphere references into decimal coordinates, tolerating absent
//!   or incomplete GPS blocks.
//! - **Capture Time**: Carries the photo's capture timestamp alongside the
//!   position.
//! - **Marker Store**: Ordered marker list with proximity-based duplicate
//!   detection, rename/remove/merge operations, and a backward-compatible
//!   saved-file format.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exifmap::store::ConflictDecision;
//! use exifmap::{LocationStore, Marker};
//!
//! fn main() -> Result<(), exifmap::ExifmapError> {
//!     let bytes = std::fs::read("sunset.jpg")?;
//!     let tags = exifmap::reader::tags_from_bytes(&bytes)?;
//!
//!     let mut store = LocationStore::new();
//!     if let Some(fix) = exifmap::gps::get_gps_fix(&tags) {
//!         store.insert_or_replace(Marker::from_fix(fix, "sunset.jpg"), ConflictDecision::Skip);
//!     }
//!     store.save(std::path::Path::new("locations.json"))?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gps;
pub mod reader;
pub mod store;

pub use error::ExifmapError;
pub use gps::{GpsCoordinate, GpsFix};
pub use store::{LocationStore, Marker};
