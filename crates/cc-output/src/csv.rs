//! CSV output backend.
//!
//! Appends to two files in the configured output directory:
//! - `hour_log.csv`
//! - `day_log.csv`
//!
//! Existing files are never truncated.  The header row is written only when
//! a file is created (or found empty).

use std::fs::{File, OpenOptions};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{DayRow, HourRow, OutputResult};

pub const HOUR_LOG: &str = "hour_log.csv";
pub const DAY_LOG: &str = "day_log.csv";

pub const HOUR_HEADER: [&str; 7] = [
    "agent_starts",
    "agents_working",
    "hour",
    "interactions_estimated",
    "interactions_handled",
    "asr_minutes",
    "timestamp",
];

pub const DAY_HEADER: [&str; 8] = [
    "agent_starts",
    "interactions_estimated",
    "interactions_handled",
    "handle_time_minutes",
    "asr_minutes",
    "utilization",
    "unfinished",
    "timestamp",
];

/// Appends simulation records to two CSV files.
pub struct CsvWriter {
    hours:    Writer<File>,
    days:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) both logs in `dir` for appending.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            hours:    open_append(&dir.join(HOUR_LOG), &HOUR_HEADER)?,
            days:     open_append(&dir.join(DAY_LOG), &DAY_HEADER)?,
            finished: false,
        })
    }
}

fn open_append(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if is_new {
        writer.write_record(header)?;
        writer.flush()?;
    }
    Ok(writer)
}

impl OutputWriter for CsvWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        self.hours.write_record(&[
            row.agent_starts.to_string(),
            row.agents_working.to_string(),
            row.hour.to_string(),
            row.interactions_estimated.to_string(),
            row.interactions_handled.to_string(),
            row.asr_minutes.to_string(),
            row.timestamp.to_rfc3339(),
        ])?;
        Ok(())
    }

    fn write_day(&mut self, row: &DayRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.agent_starts.to_string(),
            row.interactions_estimated.to_string(),
            row.interactions_handled.to_string(),
            row.handle_time_minutes.to_string(),
            row.asr_minutes.to_string(),
            row.utilization.to_string(),
            row.unfinished.to_string(),
            row.timestamp.to_rfc3339(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.hours.flush()?;
        self.days.flush()?;
        Ok(())
    }
}
