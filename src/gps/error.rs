use thiserror::Error;

/// A GPS coordinate value that is present in the metadata but cannot be
/// converted to decimal degrees.
///
/// All variants describe recoverable conditions: callers are expected to log
/// the cause and continue with their remaining inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpsDecodeError {
    #[error("coordinate value is not a degrees/minutes/seconds sequence")]
    NotASequence,

    #[error("expected 3 coordinate components (degrees/minutes/seconds), got {0}")]
    ComponentCount(usize),

    #[error("coordinate component {0} is not coercible to a number")]
    NonNumericComponent(usize),
}
