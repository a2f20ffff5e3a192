//! Simulation time model.
//!
//! # Design
//!
//! Time is a logical count of seconds since the start of the simulated day,
//! held in [`SimTime`].  Integer seconds keep all queueing arithmetic exact:
//! arrival gaps, handle times and wait durations are whole seconds, so two
//! events either share a timestamp or they do not.
//!
//! A simulated day is run as 24 bounded windows of [`HOUR_SECS`] each.
//! [`SimClock`] owns the "now" of one window and refuses to move backwards or
//! past the window's horizon.

use std::fmt;

/// Seconds in one simulated hour.
pub const HOUR_SECS: u64 = 3_600;

/// Hours in one simulated day.
pub const DAY_HOURS: usize = 24;

/// Seconds in one simulated day.
pub const DAY_SECS: u64 = HOUR_SECS * DAY_HOURS as u64;

/// Length of a regular agent shift, in hours.
pub const SHIFT_HOURS: u32 = 8;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// A logical timestamp: whole seconds since the simulated day started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The instant hour `hour` (0–23) begins.
    #[inline]
    pub fn hour_start(hour: usize) -> SimTime {
        SimTime(hour as u64 * HOUR_SECS)
    }

    /// Return the instant `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: u64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The hour of day this instant falls in.
    #[inline]
    pub fn hour(self) -> usize {
        (self.0 / HOUR_SECS) as usize
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / HOUR_SECS;
        let m = (self.0 % HOUR_SECS) / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The logical clock of one bounded simulation window.
///
/// `now` starts at the window's opening instant and only moves forward.
/// Events at or after `horizon` belong to the next window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    pub now:     SimTime,
    pub horizon: SimTime,
}

impl SimClock {
    /// A clock covering `[start, start + span_secs)`.
    pub fn window(start: SimTime, span_secs: u64) -> Self {
        Self {
            now:     start,
            horizon: start.offset(span_secs),
        }
    }

    /// The clock for simulated hour `hour`.
    pub fn for_hour(hour: usize) -> Self {
        Self::window(SimTime::hour_start(hour), HOUR_SECS)
    }

    /// Move `now` forward to `t`.
    ///
    /// Returns `false` (and leaves the clock untouched) if `t` is in the past
    /// or not before the horizon.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) -> bool {
        if t < self.now || t >= self.horizon {
            return false;
        }
        self.now = t;
        true
    }

    /// `true` when `t` falls inside this window's remaining span.
    #[inline]
    pub fn contains(&self, t: SimTime) -> bool {
        t >= self.now && t < self.horizon
    }

    /// Seconds left until the horizon.
    #[inline]
    pub fn remaining_secs(&self) -> u64 {
        self.horizon.since(self.now)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (until {})", self.now, self.horizon)
    }
}
