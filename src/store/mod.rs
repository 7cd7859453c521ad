//! Module for the ordered, duplicate-aware collection of map markers and its
//! persistence.
pub mod error;
mod logic;
mod persistence;
mod structs;

pub use error::{PersistenceError, ValidationError};
pub use logic::{COORDINATE_EPSILON, LocationStore};
pub use structs::{ConflictDecision, InsertOutcome, Marker, MergeReport};
