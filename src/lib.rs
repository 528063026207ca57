//! # interval-timer
//!
//! Non-blocking interval timer for embedded control loops, with zero heap allocation.
//!
//! Instead of suspending the whole program with a blocking delay, firmware polls
//! [`IntervalTimer::interval_reached`] from its main loop and acts when it returns true.
//!
//! **Key features:**
//! - **Non-blocking** - No sleeps, no background tasks, nothing runs between polls
//! - **Pluggable clock** - Any monotonic millisecond source via the [`Clock`] trait
//! - **Saturating arithmetic** - Overflow and narrowing never wrap or panic
//! - **Fresh intervals** - Each interval restarts at the poll that observed the previous one
//!
//! ```ignore
//! use interval_timer::{IntervalTimer, ResetMode, minutes_to_millis, seconds_to_millis};
//!
//! let mut blink = IntervalTimer::with_interval(millis as fn() -> u64, seconds_to_millis(5.0));
//! let mut report = IntervalTimer::new(millis as fn() -> u64);
//! report.set_interval(minutes_to_millis(2.0), ResetMode::Reset);
//!
//! loop {
//!     if blink.interval_reached() {
//!         led.toggle();
//!     }
//!     if report.interval_reached() {
//!         send_report();
//!     }
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std` - [`StdClock`](clock::StdClock) backed by `std::time::Instant`
//! - `log` - Trace timer events through the `log` facade
//! - `defmt` - Trace timer events through defmt, derive `defmt::Format` on public enums
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod config;
pub mod convert;
pub mod error;
pub mod timer;

mod trace;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Time source
pub use clock::Clock;

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration
pub use config::{DEFAULT_INTERVAL_MILLIS, ResetMode};

// Conversions
pub use convert::{
    SaturatingU32, minutes_to_millis, saturate_u32, seconds_to_millis, try_minutes_to_millis,
    try_seconds_to_millis,
};

// Error types
pub use error::ConversionError;

// Timer
pub use timer::{IntervalTimer, TimerState};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
