//! Wait-time and throughput metrics for one simulated day.
//!
//! ASR is the mean of every recorded wait across the whole day, never a mean
//! of hourly means.  Utilization compares completions against what the day's
//! agent-hours could have served at the mean handle time.

use cc_core::{HOUR_SECS, SHIFT_HOURS};

use crate::customer::CompletedInteraction;

/// Utilization above this is reported as full saturation.
pub const UTILIZATION_SATURATION: f64 = 0.95;

#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    waits:     Vec<u64>,
    wait_sum:  u64,
    arrived:   u64,
    completed: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_arrivals(&mut self, n: usize) {
        self.arrived += n as u64;
    }

    pub fn record(&mut self, interaction: &CompletedInteraction) {
        let wait = interaction.wait_secs();
        self.waits.push(wait);
        self.wait_sum += wait;
        self.completed += 1;
    }

    pub fn arrived(&self) -> u64 {
        self.arrived
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Every recorded wait, in completion order.
    pub fn waits(&self) -> &[u64] {
        &self.waits
    }

    /// Average Speed to Respond in minutes; `0.0` before anything completes.
    pub fn asr_minutes(&self) -> f64 {
        if self.waits.is_empty() {
            return 0.0;
        }
        self.wait_sum as f64 / self.waits.len() as f64 / 60.0
    }

    /// `floor(agent_starts × 8 h / handle_time)`.
    pub fn theoretical_max_servable(agent_starts: u32, handle_secs: u64) -> u64 {
        if handle_secs == 0 {
            return 0;
        }
        let shift_secs = SHIFT_HOURS as u64 * HOUR_SECS;
        agent_starts as u64 * shift_secs / handle_secs
    }

    /// Completions over the theoretical maximum, in `[0, 1]`.
    ///
    /// Ratios above [`UTILIZATION_SATURATION`] are reported as `1.0`.  With a
    /// zero maximum the day is saturated if anything completed at all.
    pub fn utilization(&self, agent_starts: u32, handle_secs: u64) -> f64 {
        let max = Self::theoretical_max_servable(agent_starts, handle_secs);
        if max == 0 {
            return if self.completed > 0 { 1.0 } else { 0.0 };
        }
        let ratio = self.completed as f64 / max as f64;
        if ratio > UTILIZATION_SATURATION {
            1.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }
}
