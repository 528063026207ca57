//! Monotonic clock abstraction for platform-agnostic timekeeping.
//!
//! The `Clock` trait provides the single time source an [`IntervalTimer`] reads.
//! It can be implemented for any platform (SysTick counter, RTC, `millis()`, host
//! `Instant`, simulated time in tests).
//!
//! [`IntervalTimer`]: crate::IntervalTimer

/// Platform-agnostic monotonic millisecond clock.
///
/// Implementations must never move backwards during normal operation. A 64-bit
/// millisecond counter takes ~584 million years to wrap, so wraparound is not handled.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin (typically boot).
    fn now_millis(&self) -> u64;
}

/// Shared clocks: many timers can read one clock by reference.
impl<T: Clock + ?Sized> Clock for &T {
    #[inline]
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Plain function clocks, e.g. an Arduino-style `fn millis() -> u64`.
impl Clock for fn() -> u64 {
    #[inline]
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// Host clock backed by [`std::time::Instant`] (requires `std` feature).
///
/// Reports milliseconds elapsed since the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
