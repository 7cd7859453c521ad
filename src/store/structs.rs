use crate::gps::{GpsCoordinate, GpsFix};
use crate::store::error::ValidationError;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A named geographic point shown on the map.
///
/// Markers persist as a `[[lat, lon], name, timestamp_or_null]` tuple; the
/// older two-element form without a timestamp is still read transparently.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: GpsCoordinate,
    pub name: String,
    /// Capture time of the source photo. Manually added markers have none.
    pub timestamp: Option<String>,
}

impl Marker {
    /// Builds a marker from a decoded GPS fix, carrying its timestamp.
    pub fn from_fix(fix: GpsFix, name: impl Into<String>) -> Self {
        Self {
            coordinate: fix.coordinate,
            name: name.into(),
            timestamp: fix.timestamp,
        }
    }

    /// Builds a user-entered marker, validating name and coordinate range.
    pub fn manual(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            coordinate: GpsCoordinate {
                latitude,
                longitude,
            },
            name,
            timestamp: None,
        })
    }
}

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let coordinate = (self.coordinate.latitude, self.coordinate.longitude);
        (coordinate, &self.name, &self.timestamp).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Record {
            Full((f64, f64), String, Option<String>),
            Legacy((f64, f64), String),
        }

        let ((latitude, longitude), name, timestamp) = match Record::deserialize(deserializer)? {
            Record::Full(coordinate, name, timestamp) => (coordinate, name, timestamp),
            Record::Legacy(coordinate, name) => (coordinate, name, None),
        };
        Ok(Self {
            coordinate: GpsCoordinate {
                latitude,
                longitude,
            },
            name,
            timestamp,
        })
    }
}

/// What `insert_or_replace` did with a candidate marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Replaced,
    Skipped,
}

/// The caller's resolution of a duplicate conflict, decided before the store
/// is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    Replace,
    Skip,
}

/// Per-outcome counts accumulated while merging a marker set into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub inserted: usize,
    pub replaced: usize,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_tuple_with_null_timestamp() {
        let marker = Marker::manual("A", 1.2, 3.4).unwrap();
        let json = serde_json::to_string(&marker).unwrap();
        assert_eq!(json, "[[1.2,3.4],\"A\",null]");
    }

    #[test]
    fn serializes_timestamp_when_present() {
        let mut marker = Marker::manual("A", 1.2, 3.4).unwrap();
        marker.timestamp = Some("2008:10:22 16:28:39".to_owned());
        let json = serde_json::to_string(&marker).unwrap();
        assert_eq!(json, "[[1.2,3.4],\"A\",\"2008:10:22 16:28:39\"]");
    }

    #[test]
    fn reads_legacy_two_element_form() {
        let marker: Marker = serde_json::from_str("[[1.2,3.4],\"A\"]").unwrap();
        assert_eq!(marker.name, "A");
        assert_eq!(marker.coordinate.latitude, 1.2);
        assert_eq!(marker.timestamp, None);
    }

    #[test]
    fn manual_rejects_empty_name() {
        assert_eq!(
            Marker::manual("", 0.0, 0.0),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn manual_rejects_out_of_range_latitude() {
        assert_eq!(
            Marker::manual("A", 90.5, 0.0),
            Err(ValidationError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn manual_rejects_out_of_range_longitude() {
        assert_eq!(
            Marker::manual("A", 0.0, -180.5),
            Err(ValidationError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn manual_markers_carry_no_timestamp() {
        let marker = Marker::manual("A", 40.7128, -74.006).unwrap();
        assert_eq!(marker.timestamp, None);
    }
}
