//! Extraction of a GPS fix from a metadata tag map.

use crate::gps::error::GpsDecodeError;
use crate::gps::parsing::sexagesimal_to_decimal;
use crate::gps::structs::{GpsCoordinate, GpsFix};
use serde_json::Value;
use tracing::warn;

/// Extracts the GPS position and capture timestamp from a metadata tag map.
///
/// Absent or incomplete GPS data is the common case and yields `Ok(None)`.
/// GPS fields that are present but cannot be converted yield an error so the
/// caller can distinguish "no data" from "bad data". Most callers want
/// [`get_gps_fix`] instead, which folds both into `None`.
pub fn try_get_gps_fix(tags: &Value) -> Result<Option<GpsFix>, GpsDecodeError> {
    let Some(gps) = gps_block(tags) else {
        return Ok(None);
    };
    let (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) = (
        gps.get("GPSLatitude"),
        gps.get("GPSLatitudeRef").and_then(Value::as_str),
        gps.get("GPSLongitude"),
        gps.get("GPSLongitudeRef").and_then(Value::as_str),
    ) else {
        return Ok(None);
    };

    let latitude = sexagesimal_to_decimal(lat, lat_ref)?;
    let longitude = sexagesimal_to_decimal(lon, lon_ref)?;
    let timestamp = capture_timestamp(tags);

    Ok(Some(GpsFix {
        coordinate: GpsCoordinate {
            latitude,
            longitude,
        },
        timestamp,
    }))
}

/// Never-fails variant of [`try_get_gps_fix`]: malformed GPS fields are
/// logged and reported as no result, so a batch of images keeps processing.
pub fn get_gps_fix(tags: &Value) -> Option<GpsFix> {
    match try_get_gps_fix(tags) {
        Ok(fix) => fix,
        Err(error) => {
            warn!(%error, "skipping malformed GPS metadata");
            None
        }
    }
}

/// Locates the GPS sub-map. A `GPSInfo` key that is present but not an
/// object (e.g. `null`) means no usable GPS data; a map without the key at
/// all may still carry the per-field keys at the top level (flat
/// exiftool-style output).
fn gps_block(tags: &Value) -> Option<&Value> {
    match tags.get("GPSInfo") {
        Some(block) if block.is_object() => Some(block),
        Some(_) => None,
        None => Some(tags),
    }
}

fn capture_timestamp(tags: &Value) -> Option<String> {
    tags.get("DateTimeOriginal")
        .or_else(|| tags.get("DateTime"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested_tags() -> Value {
        json!({
            "GPSInfo": {
                "GPSLatitude": [[40, 1], [42, 1], [46, 1]],
                "GPSLatitudeRef": "N",
                "GPSLongitude": [[74, 1], [0, 1], [108, 5]],
                "GPSLongitudeRef": "W",
            },
            "DateTime": "2008:10:22 16:28:39",
        })
    }

    #[test]
    fn decodes_nested_rational_map() {
        let fix = get_gps_fix(&nested_tags()).unwrap();
        assert!((fix.coordinate.latitude - 40.7128).abs() < 1e-4);
        assert!((fix.coordinate.longitude + 74.006).abs() < 1e-4);
        assert_eq!(fix.timestamp.as_deref(), Some("2008:10:22 16:28:39"));
    }

    #[test]
    fn decodes_flat_map_without_gps_info_key() {
        let tags = json!({
            "GPSLatitude": [40, 42, 46],
            "GPSLatitudeRef": "N",
            "GPSLongitude": [74, 0, 21.6],
            "GPSLongitudeRef": "W",
        });
        let fix = get_gps_fix(&tags).unwrap();
        assert!((fix.coordinate.latitude - 40.7128).abs() < 1e-4);
        assert!(fix.timestamp.is_none());
    }

    #[test]
    fn south_reference_negates_latitude() {
        let tags = json!({
            "GPSInfo": {
                "GPSLatitude": [40, 42, 46],
                "GPSLatitudeRef": "S",
                "GPSLongitude": [74, 0, 21.6],
                "GPSLongitudeRef": "E",
            },
        });
        let fix = get_gps_fix(&tags).unwrap();
        assert!((fix.coordinate.latitude + 40.7128).abs() < 1e-4);
        assert!(fix.coordinate.longitude > 0.0);
    }

    #[test]
    fn empty_map_yields_none() {
        assert_eq!(get_gps_fix(&json!({})), None);
    }

    #[test]
    fn empty_gps_block_yields_none() {
        assert_eq!(get_gps_fix(&json!({ "GPSInfo": {} })), None);
    }

    #[test]
    fn null_gps_block_yields_none() {
        assert_eq!(get_gps_fix(&json!({ "GPSInfo": null })), None);
    }

    #[test]
    fn missing_reference_yields_none() {
        let mut tags = nested_tags();
        tags["GPSInfo"]
            .as_object_mut()
            .unwrap()
            .remove("GPSLongitudeRef");
        assert_eq!(get_gps_fix(&tags), None);
    }

    #[test]
    fn missing_latitude_yields_none() {
        let mut tags = nested_tags();
        tags["GPSInfo"].as_object_mut().unwrap().remove("GPSLatitude");
        assert_eq!(get_gps_fix(&tags), None);
    }

    #[test]
    fn malformed_latitude_is_an_error_not_a_panic() {
        let mut tags = nested_tags();
        tags["GPSInfo"]["GPSLatitude"] = json!([[40, 1], [42, 1]]);
        assert_eq!(
            try_get_gps_fix(&tags),
            Err(GpsDecodeError::ComponentCount(2))
        );
        // The lossy surface folds the error into "no result".
        assert_eq!(get_gps_fix(&tags), None);
    }

    #[test]
    fn timestamp_prefers_date_time_original() {
        let mut tags = nested_tags();
        tags["DateTimeOriginal"] = json!("2007:01:01 00:00:00");
        let fix = get_gps_fix(&tags).unwrap();
        assert_eq!(fix.timestamp.as_deref(), Some("2007:01:01 00:00:00"));
    }
}
