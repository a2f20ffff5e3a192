//! Observer trait for per-hour and per-day records.

use crate::summary::{DaySummary, HourSummary};

/// Callbacks invoked by [`DayDriver::run`][crate::DayDriver::run] and the
/// sweeps.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: hour printer
///
/// ```rust,ignore
/// struct HourPrinter;
///
/// impl DayObserver for HourPrinter {
///     fn on_hour_end(&mut self, hour: &HourSummary) {
///         println!("{:02}:00  {} agents, {} handled", hour.hour, hour.agents_working, hour.handled);
///     }
/// }
/// ```
pub trait DayObserver {
    /// Called after each simulated hour, in hour order.
    fn on_hour_end(&mut self, _hour: &HourSummary) {}

    /// Called once per simulated day, after its last hour.
    fn on_day_end(&mut self, _day: &DaySummary) {}

    /// Called once after the last day of a run or sweep.
    fn on_run_end(&mut self) {}
}

/// A [`DayObserver`] that does nothing.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}

/// Keeps every record it is handed.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub hours: Vec<HourSummary>,
    pub days:  Vec<DaySummary>,
}

impl DayObserver for RecordingObserver {
    fn on_hour_end(&mut self, hour: &HourSummary) {
        self.hours.push(hour.clone());
    }

    fn on_day_end(&mut self, day: &DaySummary) {
        self.days.push(day.clone());
    }
}
