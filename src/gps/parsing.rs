//! Coercion of raw Exif GPS values into decimal degrees.

use crate::gps::error::GpsDecodeError;
use chrono::NaiveDateTime;
use serde_json::Value;

/// Coerces a single coordinate component to a number.
///
/// Accepts a plain JSON number, a `[numerator, denominator]` rational pair,
/// a `"num/den"` string, or a plain numeric string. A zero denominator is
/// not coercible.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Array(pair) if pair.len() == 2 => {
            let num = pair[0].as_f64()?;
            let den = pair[1].as_f64()?;
            (den != 0.0).then(|| num / den)
        }
        Value::String(s) => match s.split_once('/') {
            Some((num, den)) => {
                let num: f64 = num.trim().parse().ok()?;
                let den: f64 = den.trim().parse().ok()?;
                (den != 0.0).then(|| num / den)
            }
            None => s.trim().parse().ok(),
        },
        _ => None,
    }
}

/// Converts a degrees/minutes/seconds value with its hemisphere reference
/// into signed decimal degrees.
///
/// The reference only flips the sign for `S` and `W`; any other value is
/// treated as the positive hemisphere.
pub(crate) fn sexagesimal_to_decimal(
    value: &Value,
    reference: &str,
) -> Result<f64, GpsDecodeError> {
    let components = value.as_array().ok_or(GpsDecodeError::NotASequence)?;
    if components.len() != 3 {
        return Err(GpsDecodeError::ComponentCount(components.len()));
    }
    let mut parts = [0.0; 3];
    for (index, component) in components.iter().enumerate() {
        parts[index] =
            coerce_number(component).ok_or(GpsDecodeError::NonNumericComponent(index))?;
    }
    let decimal = parts[0] + parts[1] / 60.0 + parts[2] / 3600.0;
    match reference.trim() {
        "S" | "W" => Ok(-decimal),
        _ => Ok(decimal),
    }
}

/// Parses a naive datetime string as found in Exif (`YYYY:MM:DD HH:MM:SS`,
/// with a dashed date variant for tolerance).
pub(crate) fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    let formats = ["%Y:%m:%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
}
