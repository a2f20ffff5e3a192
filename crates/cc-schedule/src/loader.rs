//! CSV loader for the hourly volume and staffing curves.
//!
//! # CSV format
//!
//! One row per hour of day; every hour 0..=23 must appear exactly once.
//!
//! ```csv
//! hour,volume_share,staffing_target
//! 0,0.002,0.0045
//! 1,0.002,0.0045
//! ...
//! 23,0.003,0.0045
//! ```
//!
//! Rows may appear in any order.  The loader only checks shape; the sums are
//! checked by `CenterConfig::validate` once the curves are installed.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cc_core::{CenterConfig, HourlyCurve, DAY_HOURS};

use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CurveRecord {
    hour:            usize,
    volume_share:    f64,
    staffing_target: f64,
}

/// Both hourly curves, as read from one table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveTable {
    pub volume_share:    HourlyCurve,
    pub staffing_target: HourlyCurve,
}

impl CurveTable {
    /// Install these curves into `config`.
    pub fn apply(&self, config: &mut CenterConfig) {
        config.hourly_volume_share = self.volume_share;
        config.hourly_staffing_target = self.staffing_target;
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load both hourly curves from a CSV file.
pub fn load_curves_csv(path: &Path) -> Result<CurveTable, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_curves_reader(file)
}

/// Like [`load_curves_csv`] but accepts any `Read` source.
pub fn load_curves_reader<R: Read>(reader: R) -> Result<CurveTable, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut volume: [Option<f64>; DAY_HOURS] = [None; DAY_HOURS];
    let mut staffing = [0.0; DAY_HOURS];

    for result in csv_reader.deserialize::<CurveRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if row.hour >= DAY_HOURS {
            return Err(ScheduleError::Parse(format!("hour {} is out of range 0..=23", row.hour)));
        }
        if volume[row.hour].is_some() {
            return Err(ScheduleError::Parse(format!("hour {} appears more than once", row.hour)));
        }
        volume[row.hour] = Some(row.volume_share);
        staffing[row.hour] = row.staffing_target;
    }

    let mut volume_share = [0.0; DAY_HOURS];
    for (hour, v) in volume.iter().enumerate() {
        volume_share[hour] = v.ok_or_else(|| ScheduleError::Parse(format!("hour {hour} is missing")))?;
    }

    Ok(CurveTable {
        volume_share:    HourlyCurve::new(volume_share),
        staffing_target: HourlyCurve::new(staffing),
    })
}
