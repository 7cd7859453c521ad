//! Builds a metadata tag map from raw image bytes.
//!
//! The presentation layer fetches bytes from disk or the network; this
//! module turns them into the `serde_json::Value` tag map consumed by
//! [`crate::gps::get_gps_fix`]. GPS rationals are carried as
//! `[numerator, denominator]` pairs so the decoder performs the sexagesimal
//! conversion itself.

use exif::{In, Tag};
use serde_json::{Map, Value, json};
use std::io::Cursor;

/// Parses the Exif payload of an image and returns its tag map.
///
/// An image that carries no Exif data at all yields an empty map, which the
/// decoder treats as "no GPS data". Only an unreadable container is an
/// error.
pub fn tags_from_bytes(bytes: &[u8]) -> Result<Value, exif::Error> {
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(Value::Object(Map::new())),
        Err(error) => return Err(error),
    };

    let mut gps = Map::new();
    insert(&mut gps, "GPSLatitude", rationals(&exif, Tag::GPSLatitude));
    insert(&mut gps, "GPSLatitudeRef", text(&exif, Tag::GPSLatitudeRef));
    insert(&mut gps, "GPSLongitude", rationals(&exif, Tag::GPSLongitude));
    insert(
        &mut gps,
        "GPSLongitudeRef",
        text(&exif, Tag::GPSLongitudeRef),
    );

    let mut tags = Map::new();
    if !gps.is_empty() {
        tags.insert("GPSInfo".to_owned(), Value::Object(gps));
    }
    insert(
        &mut tags,
        "DateTimeOriginal",
        text(&exif, Tag::DateTimeOriginal),
    );
    insert(&mut tags, "DateTime", text(&exif, Tag::DateTime));
    Ok(Value::Object(tags))
}

fn insert(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_owned(), value);
    }
}

fn rationals(exif: &exif::Exif, tag: Tag) -> Option<Value> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        exif::Value::Rational(parts) => Some(Value::Array(
            parts.iter().map(|r| json!([r.num, r.denom])).collect(),
        )),
        _ => None,
    }
}

fn text(exif: &exif::Exif, tag: Tag) -> Option<Value> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    // Ascii values display quoted.
    let text = field.display_value().to_string();
    let text = text.trim_matches('"').trim().to_owned();
    (!text.is_empty()).then(|| Value::String(text))
}
