//! Records emitted per simulated hour and per simulated day.

/// One simulated hour.
#[derive(Clone, Debug, PartialEq)]
pub struct HourSummary {
    pub hour:                   usize,
    pub agent_starts:           u32,
    pub agents_working:         usize,
    /// Bench left after this hour's staffing decision.
    pub bench:                  u32,
    /// `true` if the fallback agent had to be substituted.
    pub fallback:               bool,
    /// Interactions planned for the hour.
    pub interactions_estimated: u64,
    pub arrived:                usize,
    /// Interactions completed during the hour.
    pub handled:                usize,
    /// Interactions completed since 00:00.
    pub handled_total:          u64,
    /// Day ASR so far, in minutes.
    pub asr_minutes:            f64,
    pub queued_at_end:          usize,
    pub in_service_at_end:      usize,
}

/// One simulated day.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    pub agent_starts:           u32,
    /// The day's planned volume.
    pub interactions_estimated: u64,
    pub arrived:                u64,
    pub handled:                u64,
    /// Mean handle time used for the day, in minutes.
    pub handle_time_minutes:    f64,
    pub asr_minutes:            f64,
    pub utilization:            f64,
    /// Interactions still queued or in service at 24:00.
    pub unfinished:             usize,
}
