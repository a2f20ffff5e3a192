//! `cc-output` — append-only record sinks for the contact-center simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files appended to                   |
//! |-----------|---------|-------------------------------------|
//! | *(none)*  | CSV     | `hour_log.csv`, `day_log.csv`       |
//! | `sqlite`  | SQLite  | `vsc_log.db`                        |
//!
//! Both implement [`OutputWriter`] and are driven by [`SummaryObserver`],
//! which implements `cc_sim::DayObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, SummaryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./logs"))?;
//! let mut obs = SummaryObserver::new(writer).with_hourly(true);
//! cc_sim::run_day(config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SummaryObserver;
pub use row::{DayRow, HourRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
