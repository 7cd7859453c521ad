use thiserror::Error;

/// The primary error type for the exifmap crate.
#[derive(Error, Debug)]
pub enum ExifmapError {
    #[error("Could not parse the image's Exif container")]
    Exif(#[from] exif::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- Custom Module Errors ---
    #[error("GPS decoding failed: {0}")]
    Gps(#[from] crate::gps::GpsDecodeError),

    #[error("Saved locations error: {0}")]
    Persistence(#[from] crate::store::PersistenceError),

    #[error("Invalid marker: {0}")]
    Validation(#[from] crate::store::ValidationError),
}
