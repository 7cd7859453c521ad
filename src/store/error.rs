use thiserror::Error;

/// Failure while reading or writing the saved-locations file.
///
/// A failed load never corrupts an in-memory store: loading parses the whole
/// file before any marker is touched.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not access saved locations file: {0}")]
    Io(#[from] std::io::Error),

    #[error("saved locations file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A manually entered marker that was rejected before reaching the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("marker name must not be empty")]
    EmptyName,

    #[error("latitude {0} is outside the valid range -90 to 90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside the valid range -180 to 180")]
    LongitudeOutOfRange(f64),
}
