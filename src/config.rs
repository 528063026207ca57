//! Configuration types for timer construction and interval changes.

/// Interval used by [`IntervalTimer::new`]: the largest representable value (~49.7 days).
///
/// [`IntervalTimer::new`]: crate::IntervalTimer::new
pub const DEFAULT_INTERVAL_MILLIS: u32 = u32::MAX;

/// What [`IntervalTimer::set_interval`] does with the running period.
///
/// [`IntervalTimer::set_interval`]: crate::IntervalTimer::set_interval
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetMode {
    /// Restart the period now and discard a pending override.
    #[default]
    Reset,

    /// Keep the current period start; the new interval is measured from when
    /// the period last began.
    Continue,
}

impl From<bool> for ResetMode {
    /// `true` resets, `false` continues.
    fn from(reset: bool) -> Self {
        if reset {
            ResetMode::Reset
        } else {
            ResetMode::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        assert_eq!(DEFAULT_INTERVAL_MILLIS, 4_294_967_295);
    }

    #[test]
    fn test_reset_mode_from_bool() {
        assert_eq!(ResetMode::from(true), ResetMode::Reset);
        assert_eq!(ResetMode::from(false), ResetMode::Continue);
    }

    #[test]
    fn test_reset_mode_default() {
        assert_eq!(ResetMode::default(), ResetMode::Reset);
    }
}
