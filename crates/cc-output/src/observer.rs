//! `SummaryObserver<W>` — bridges `DayObserver` to an `OutputWriter`.

use cc_sim::{DayObserver, DaySummary, HourSummary};
use chrono::Utc;

use crate::row::{DayRow, HourRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DayObserver`] that logs day summaries (and, optionally, hour
/// summaries) to any [`OutputWriter`] backend.
///
/// Every record is stamped with the wall-clock time it was written.  Errors
/// from the writer are stored internally because `DayObserver` methods have
/// no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SummaryObserver<W: OutputWriter> {
    writer:     W,
    hourly:     bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SummaryObserver<W> {
    /// Log day summaries only.
    pub fn new(writer: W) -> Self {
        Self { writer, hourly: false, last_error: None }
    }

    /// Also log one record per simulated hour.
    pub fn with_hourly(mut self, hourly: bool) -> Self {
        self.hourly = hourly;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DayObserver for SummaryObserver<W> {
    fn on_hour_end(&mut self, hour: &HourSummary) {
        if !self.hourly {
            return;
        }
        let row = HourRow::from_summary(hour, Utc::now());
        let result = self.writer.write_hour(&row);
        self.store_err(result);
    }

    fn on_day_end(&mut self, day: &DaySummary) {
        let row = DayRow::from_summary(day, Utc::now());
        let result = self.writer.write_day(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
