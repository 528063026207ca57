//! Saturating numeric conversions and unit helpers.
//!
//! Every narrowing to the 32-bit interval representation goes through
//! [`saturate_u32`], so overflow behaves the same everywhere: negative values
//! clamp to 0, values above `u32::MAX` clamp to `u32::MAX`, nothing wraps.

use crate::error::ConversionError;

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Numeric types that can be narrowed to `u32` by saturation.
///
/// Floats truncate toward zero; NaN maps to 0.
pub trait SaturatingU32: Copy {
    /// Convert to `u32`, pinning out-of-range values to the nearest bound.
    fn saturating_u32(self) -> u32;
}

macro_rules! impl_saturating_unsigned {
    ($($t:ty),*) => {
        $(
            impl SaturatingU32 for $t {
                #[inline]
                fn saturating_u32(self) -> u32 {
                    u32::try_from(self).unwrap_or(u32::MAX)
                }
            }
        )*
    };
}

macro_rules! impl_saturating_signed {
    ($($t:ty),*) => {
        $(
            impl SaturatingU32 for $t {
                #[inline]
                fn saturating_u32(self) -> u32 {
                    if self < 0 {
                        0
                    } else {
                        u32::try_from(self).unwrap_or(u32::MAX)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_saturating_float {
    ($($t:ty),*) => {
        $(
            impl SaturatingU32 for $t {
                #[inline]
                fn saturating_u32(self) -> u32 {
                    // `as` from float saturates at both bounds and maps NaN to 0
                    self as u32
                }
            }
        )*
    };
}

impl_saturating_unsigned!(u8, u16, u32, u64, u128, usize);
impl_saturating_signed!(i8, i16, i32, i64, i128, isize);
impl_saturating_float!(f32, f64);

/// Narrow any supported numeric value to `u32` by saturation.
#[inline]
pub fn saturate_u32<T: SaturatingU32>(value: T) -> u32 {
    value.saturating_u32()
}

/// Convert seconds to milliseconds.
///
/// Saturates at `u32::MAX` (~4,294,967 s, roughly 49 days) and truncates
/// fractional milliseconds toward zero. Negative input yields 0.
pub fn seconds_to_millis(seconds: f32) -> u32 {
    saturate_u32(f64::from(seconds) * MILLIS_PER_SECOND)
}

/// Convert minutes to milliseconds.
///
/// Saturates at `u32::MAX` (~71,582 min, roughly 49 days) and truncates
/// fractional milliseconds toward zero. Negative input yields 0.
pub fn minutes_to_millis(minutes: f32) -> u32 {
    saturate_u32(f64::from(minutes) * MILLIS_PER_MINUTE)
}

/// Convert seconds to milliseconds, rejecting values that would saturate.
pub fn try_seconds_to_millis(seconds: f32) -> Result<u32, ConversionError> {
    checked_millis(f64::from(seconds) * MILLIS_PER_SECOND)
}

/// Convert minutes to milliseconds, rejecting values that would saturate.
pub fn try_minutes_to_millis(minutes: f32) -> Result<u32, ConversionError> {
    checked_millis(f64::from(minutes) * MILLIS_PER_MINUTE)
}

fn checked_millis(millis: f64) -> Result<u32, ConversionError> {
    if millis.is_nan() {
        return Err(ConversionError::NotANumber);
    }
    if millis < 0.0 {
        return Err(ConversionError::Negative);
    }
    // Anything at or past 2^32 truncates to a value u32 cannot hold
    if millis >= f64::from(u32::MAX) + 1.0 {
        return Err(ConversionError::OutOfRange);
    }
    Ok(saturate_u32(millis))
}
