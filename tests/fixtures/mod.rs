//! Test fixtures and utilities for interval-timer testing.
//!
//! Provides:
//! - `MockClock`: Test implementation of the Clock trait with simulated time
//! - `poll_until`: Drive a timer across a span of simulated time

#![allow(dead_code)]

use interval_timer::{Clock, IntervalTimer};
use std::cell::Cell;

// ============================================================================
// MockClock - Simulated Monotonic Time
// ============================================================================

/// Mock clock for testing.
///
/// Simulated millisecond counter. Uses `Cell` so timers can hold `&MockClock`
/// while the test advances time.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    /// Create clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create clock at the given time.
    pub fn at(millis: u64) -> Self {
        Self {
            now: Cell::new(millis),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }

    /// Advance by `millis`.
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    /// Current simulated time.
    pub fn now(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Polling Helpers
// ============================================================================

/// Poll `timer` once per millisecond from the current time up to and including
/// `until`, returning the clock times at which it fired.
pub fn poll_until(timer: &mut IntervalTimer<&MockClock>, until: u64) -> Vec<u64> {
    let clock = *timer.clock();
    let mut fired = Vec::new();
    while clock.now() <= until {
        if timer.interval_reached() {
            fired.push(clock.now());
        }
        clock.advance(1);
    }
    fired
}
