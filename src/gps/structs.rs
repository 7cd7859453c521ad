use crate::gps::parsing::parse_naive;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A geographic position in signed decimal degrees.
///
/// Instances are only produced by validated conversion from Exif sexagesimal
/// values or by validated manual entry, never constructed partially.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GpsCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The result of decoding the GPS block of a photo's metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsFix {
    pub coordinate: GpsCoordinate,
    /// Capture time exactly as written by the camera, typically
    /// `YYYY:MM:DD HH:MM:SS`. Carried through unvalidated.
    pub timestamp: Option<String>,
}

impl GpsFix {
    /// Best-effort parse of [`GpsFix::timestamp`] into a naive datetime.
    pub fn capture_time(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_naive)
    }
}
