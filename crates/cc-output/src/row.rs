//! Plain data row types written by output backends.

use cc_sim::{DaySummary, HourSummary};
use chrono::{DateTime, Utc};

/// One simulated hour, as logged.
#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub agent_starts:           u32,
    pub agents_working:         u32,
    pub hour:                   u32,
    pub interactions_estimated: u64,
    /// Interactions handled since 00:00.
    pub interactions_handled:   u64,
    /// Day ASR so far, in minutes.
    pub asr_minutes:            f64,
    pub timestamp:              DateTime<Utc>,
}

impl HourRow {
    pub fn from_summary(hour: &HourSummary, timestamp: DateTime<Utc>) -> Self {
        Self {
            agent_starts:           hour.agent_starts,
            agents_working:         hour.agents_working as u32,
            hour:                   hour.hour as u32,
            interactions_estimated: hour.interactions_estimated,
            interactions_handled:   hour.handled_total,
            asr_minutes:            hour.asr_minutes,
            timestamp,
        }
    }
}

/// One simulated day, as logged.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub agent_starts:           u32,
    pub interactions_estimated: u64,
    pub interactions_handled:   u64,
    pub handle_time_minutes:    f64,
    pub asr_minutes:            f64,
    pub utilization:            f64,
    /// Queued or in service at 24:00.
    pub unfinished:             u64,
    pub timestamp:              DateTime<Utc>,
}

impl DayRow {
    pub fn from_summary(day: &DaySummary, timestamp: DateTime<Utc>) -> Self {
        Self {
            agent_starts:           day.agent_starts,
            interactions_estimated: day.interactions_estimated,
            interactions_handled:   day.handled,
            handle_time_minutes:    day.handle_time_minutes,
            asr_minutes:            day.asr_minutes,
            utilization:            day.utilization,
            unfinished:             day.unfinished as u64,
            timestamp,
        }
    }
}
