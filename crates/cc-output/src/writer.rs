//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DayRow, HourRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Writers only ever append; nothing already logged is rewritten.  Errors
/// raised while observing a run are stored by
/// [`SummaryObserver`][crate::SummaryObserver] and retrieved with
/// `take_error`.
pub trait OutputWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()>;

    fn write_day(&mut self, row: &DayRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
