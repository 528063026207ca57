//! Feature-gated event tracing.
//!
//! `timer_trace!` forwards to `log::trace!` and/or `defmt::trace!` depending on the
//! enabled features, and expands to nothing otherwise. Format strings must stay
//! within the subset both crates accept (plain `{}` placeholders).

macro_rules! timer_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);

        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

pub(crate) use timer_trace;
