//! Error types for checked unit conversions.
//!
//! Timer operations themselves never fail. `ConversionError` is only returned by
//! the `try_*` conversion helpers, for callers that want to reject a duration
//! instead of silently saturating it.

use core::fmt;

/// Conversion error type.
///
/// Describes why a duration could not be represented exactly as a `u32` millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Input was NaN
    NotANumber,

    /// Input was negative (saturating conversion would yield 0)
    Negative,

    /// Result exceeds `u32::MAX` milliseconds (~49 days)
    OutOfRange,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotANumber => write!(f, "Duration is not a number"),
            ConversionError::Negative => write!(f, "Duration is negative"),
            ConversionError::OutOfRange => {
                write!(f, "Duration exceeds {} milliseconds", u32::MAX)
            }
        }
    }
}

impl core::error::Error for ConversionError {}
