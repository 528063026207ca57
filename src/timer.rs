//! The interval timer state machine.
//!
//! An `IntervalTimer` never blocks. Callers poll [`IntervalTimer::interval_reached`]
//! from their own loop; the timer does nothing between polls.
//!
//! Each interval is measured from the moment the previous one was observed
//! reached, not from a fixed schedule. A poll that arrives 3 ms late starts the
//! next full interval at that late poll, so individual intervals are never shortened
//! but the total over many intervals drifts by the accumulated polling latency.

use crate::clock::Clock;
use crate::config::{DEFAULT_INTERVAL_MILLIS, ResetMode};
use crate::convert::saturate_u32;
use crate::trace::timer_trace;

/// Logical state of a timer at a given instant.
///
/// Derived from the activation and override flags plus the elapsed time;
/// see [`IntervalTimer::state`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Deactivated: polls always return false.
    Inactive,

    /// Active, interval not yet elapsed.
    Running,

    /// Active, interval elapsed: the next poll fires.
    Elapsed,

    /// Active, override pending: the next poll fires regardless of elapsed time.
    Overridden,
}

/// Non-blocking recurring interval timer.
///
/// Generic over the clock it reads, so a single clock can be shared by reference
/// (`IntervalTimer<&MyClock>`), owned, or supplied as a `fn() -> u64`.
#[derive(Debug, Clone)]
pub struct IntervalTimer<C: Clock> {
    clock: C,
    period_start: u64,
    interval_millis: u32,
    override_pending: bool,
    active: bool,
}

impl<C: Clock> IntervalTimer<C> {
    /// Create an inactive timer with the maximum interval (~49 days).
    ///
    /// Useful when the interval is not known yet. [`set_interval`](Self::set_interval)
    /// activates the timer later.
    pub fn new(clock: C) -> Self {
        let mut timer = Self::with_interval(clock, DEFAULT_INTERVAL_MILLIS);
        timer.deactivate();
        timer
    }

    /// Create an active timer whose first period starts now.
    ///
    /// Use [`seconds_to_millis`](crate::seconds_to_millis) or
    /// [`minutes_to_millis`](crate::minutes_to_millis) for readable intervals.
    pub fn with_interval(clock: C, interval_millis: u32) -> Self {
        let period_start = clock.now_millis();
        Self {
            clock,
            period_start,
            interval_millis,
            override_pending: false,
            active: true,
        }
    }

    /// Activate the timer with a full interval ahead. Discards a pending override.
    pub fn activate(&mut self) {
        self.restart_period();
        self.active = true;
        timer_trace!("timer activated at {} ms", self.period_start);
    }

    /// Deactivate the timer; [`interval_reached`](Self::interval_reached) returns
    /// false until reactivated. Discards a pending override.
    pub fn deactivate(&mut self) {
        self.restart_period();
        self.active = false;
        timer_trace!("timer deactivated at {} ms", self.period_start);
    }

    /// Returns true if the timer is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the interval and activate the timer.
    ///
    /// With [`ResetMode::Continue`] the period keeps its start, so the new interval
    /// may already be elapsed on the next poll.
    pub fn set_interval(&mut self, interval_millis: u32, reset: ResetMode) {
        self.interval_millis = interval_millis;
        if reset == ResetMode::Reset {
            self.restart_period();
        }
        self.active = true;
        timer_trace!("timer interval set to {} ms", interval_millis);
    }

    /// Check whether the interval has elapsed since the last reset.
    ///
    /// Returns true once per elapsed interval (or pending override) and starts a new
    /// period at the current time, no matter how far the previous one overran.
    pub fn interval_reached(&mut self) -> bool {
        if !self.active {
            return false;
        }

        let now = self.clock.now_millis();
        if self.override_pending || self.elapsed_at(now) {
            self.period_start = now;
            self.override_pending = false;
            timer_trace!("timer interval reached at {} ms", now);
            return true;
        }

        false
    }

    /// Make the next [`interval_reached`](Self::interval_reached) call return true once.
    ///
    /// Only observable while active. Any reset before that call (`reset_interval`,
    /// `activate`, `deactivate`, `set_interval` with [`ResetMode::Reset`]) discards it.
    pub fn override_interval_reached(&mut self) {
        self.override_pending = true;
    }

    /// Returns the configured interval (not the time left, see
    /// [`time_left_millis`](Self::time_left_millis)).
    pub fn get_interval(&self) -> u32 {
        self.interval_millis
    }

    /// Restart the period from now, leaving the activation state untouched.
    pub fn reset_interval(&mut self) {
        self.restart_period();
    }

    /// Time left until the interval elapses, clamped to `[0, u32::MAX]`.
    ///
    /// Not meaningful while inactive.
    pub fn time_left_millis(&self) -> u32 {
        let deadline = i128::from(self.period_start) + i128::from(self.interval_millis);
        saturate_u32(deadline - i128::from(self.clock.now_millis()))
    }

    /// Time passed since the current period began, clamped to `[0, u32::MAX]`.
    pub fn time_passed_millis(&self) -> u32 {
        saturate_u32(i128::from(self.clock.now_millis()) - i128::from(self.period_start))
    }

    /// Snapshot of the timer's logical state. Pure: a fired state is not consumed.
    pub fn state(&self) -> TimerState {
        if !self.active {
            TimerState::Inactive
        } else if self.override_pending {
            TimerState::Overridden
        } else if self.elapsed_at(self.clock.now_millis()) {
            TimerState::Elapsed
        } else {
            TimerState::Running
        }
    }

    /// Access the clock this timer reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Interval elapsed at `now`. A clock reading behind `period_start` counts as
    /// zero time passed.
    fn elapsed_at(&self, now: u64) -> bool {
        now.saturating_sub(self.period_start) >= u64::from(self.interval_millis)
    }

    fn restart_period(&mut self) {
        self.override_pending = false;
        self.period_start = self.clock.now_millis();
    }
}

impl<C: Clock + Default> Default for IntervalTimer<C> {
    /// Same as [`IntervalTimer::new`] with a default-constructed clock.
    fn default() -> Self {
        Self::new(C::default())
    }
}
