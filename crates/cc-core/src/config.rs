//! Run configuration and its validation.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "agent_starts": 20,
//!   "interactions_mean": 950,
//!   "interactions_stdev": 40,
//!   "handle_time_mean": 9.17,
//!   "handle_time_stdev": 0.083,
//!   "hourly_volume_share":    { "0": 0.002, "1": 0.002, "...": 0.0, "23": 0.003 },
//!   "hourly_staffing_target": { "0": 0.0045, "...": 0.0, "23": 0.0045 },
//!   "enable_randomization": false,
//!   "seed": 42,
//!   "hourly_forecast": [1.9, 1.9, "...", 2.9]
//! }
//! ```
//!
//! Handle times are in **minutes**.  The hourly curves are maps keyed by the
//! hour of day as a string; each must list every hour exactly once and sum to
//! 1.0 within [`CURVE_TOLERANCE`].  Omitted curves fall back to the reference
//! curves of [`CenterConfig::default`].  `seed` defaults to 0 and
//! `hourly_forecast` is optional.
//!
//! A `CenterConfig` is immutable for the duration of a run.  Every check runs
//! in [`CenterConfig::validate`] so that a malformed configuration is rejected
//! before hour 0, never mid-run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::time::DAY_HOURS;
use crate::{CoreError, CoreResult};

/// Maximum allowed distance of an hourly curve's sum from 1.0.
pub const CURVE_TOLERANCE: f64 = 1e-3;

/// Share of a day's interactions arriving in each hour (sums to 1.0).
const REFERENCE_VOLUME_SHARE: [f64; DAY_HOURS] = [
    0.002, 0.002, 0.005, 0.008, 0.026, 0.053, 0.080, 0.099, 0.101, 0.102, 0.099, 0.103,
    0.099, 0.073, 0.046, 0.033, 0.024, 0.015, 0.010, 0.007, 0.004, 0.003, 0.003, 0.003,
];

/// Relative staffing weight per hour.  Normalised to 1.0 before use.
const REFERENCE_STAFFING_WEIGHT: [f64; DAY_HOURS] = [
    0.04, 0.04, 0.04, 0.09, 0.18, 0.40, 0.57, 0.62, 0.74, 0.79, 0.84, 0.88,
    0.84, 0.75, 0.57, 0.40, 0.31, 0.22, 0.22, 0.13, 0.09, 0.09, 0.04, 0.04,
];

// ── HourlyCurve ───────────────────────────────────────────────────────────────

/// One fraction per hour of day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourlyCurve([f64; DAY_HOURS]);

impl HourlyCurve {
    pub fn new(values: [f64; DAY_HOURS]) -> Self {
        HourlyCurve(values)
    }

    /// Scale `weights` so they sum to 1.0.  All-zero weights stay all-zero.
    pub fn normalized(weights: [f64; DAY_HOURS]) -> Self {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return HourlyCurve(weights);
        }
        HourlyCurve(weights.map(|w| w / total))
    }

    /// The fraction for `hour`; hours past 23 read as 0.
    #[inline]
    pub fn get(&self, hour: usize) -> f64 {
        self.0.get(hour).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f64; DAY_HOURS] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Check every value is a fraction and the curve sums to 1.0.
    pub fn validate(&self, field: &str) -> CoreResult<()> {
        for (hour, &v) in self.0.iter().enumerate() {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(CoreError::config(
                    format!("{field}[{hour}]"),
                    format!("{v} is not a fraction in [0, 1]"),
                ));
            }
        }
        let total = self.sum();
        if (total - 1.0).abs() > CURVE_TOLERANCE {
            return Err(CoreError::config(
                field,
                format!("values sum to {total:.6}, expected 1.0 ± {CURVE_TOLERANCE}"),
            ));
        }
        Ok(())
    }

    /// Build from the collaborator's `hour → fraction` map.
    fn from_map(field: &str, map: &BTreeMap<String, f64>) -> CoreResult<Self> {
        let mut values = [f64::NAN; DAY_HOURS];
        for (key, &v) in map {
            let hour: usize = key.trim().parse().map_err(|_| {
                CoreError::config(field, format!("key {key:?} is not an hour of day"))
            })?;
            if hour >= DAY_HOURS {
                return Err(CoreError::config(field, format!("hour {hour} is out of range 0..=23")));
            }
            if !values[hour].is_nan() {
                return Err(CoreError::config(field, format!("hour {hour} is listed more than once")));
            }
            values[hour] = v;
        }
        if let Some(missing) = values.iter().position(|v| v.is_nan()) {
            return Err(CoreError::config(field, format!("hour {missing} is missing")));
        }
        Ok(HourlyCurve(values))
    }
}

// ── CenterConfig ──────────────────────────────────────────────────────────────

/// Everything one simulated day needs from the outside world.
#[derive(Clone, Debug, PartialEq)]
pub struct CenterConfig {
    /// Agents who start a shift today.  Must be at least 1.
    pub agent_starts: u32,

    /// Mean and standard deviation of today's interaction volume.
    pub interactions_mean:  f64,
    pub interactions_stdev: f64,

    /// Mean and standard deviation of one interaction's handle time, minutes.
    pub handle_time_mean:  f64,
    pub handle_time_stdev: f64,

    /// Fraction of the day's volume arriving in each hour.
    pub hourly_volume_share: HourlyCurve,

    /// Fraction of the day's agent-hours wanted in each hour.
    pub hourly_staffing_target: HourlyCurve,

    /// `true` draws volume and handle times from their distributions;
    /// `false` uses the means.
    pub enable_randomization: bool,

    /// Master RNG seed.  The same seed always produces the same day.
    pub seed: u64,

    /// Externally forecast interaction counts per hour.  When present these
    /// replace `interactions_mean × hourly_volume_share`.
    pub hourly_forecast: Option<[f64; DAY_HOURS]>,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            agent_starts:           20,
            interactions_mean:      950.0,
            interactions_stdev:     40.0,
            handle_time_mean:       9.17,
            handle_time_stdev:      0.083,
            hourly_volume_share:    HourlyCurve::new(REFERENCE_VOLUME_SHARE),
            hourly_staffing_target: HourlyCurve::normalized(REFERENCE_STAFFING_WEIGHT),
            enable_randomization:   false,
            seed:                   0,
            hourly_forecast:        None,
        }
    }
}

impl CenterConfig {
    /// Load and validate a configuration file.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Like [`from_json_path`][Self::from_json_path] but from an in-memory
    /// document.
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let config = CenterConfig::try_from(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Mean handle time in whole seconds.
    #[inline]
    pub fn handle_time_secs(&self) -> u64 {
        (self.handle_time_mean * 60.0).floor().max(0.0) as u64
    }

    /// Reject anything that would make the run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.agent_starts == 0 {
            return Err(CoreError::config(
                "agent_starts",
                "must be at least 1: a day cannot run with zero possible agent starts",
            ));
        }
        non_negative("interactions_mean", self.interactions_mean)?;
        non_negative("interactions_stdev", self.interactions_stdev)?;
        non_negative("handle_time_mean", self.handle_time_mean)?;
        non_negative("handle_time_stdev", self.handle_time_stdev)?;
        if self.handle_time_secs() == 0 {
            return Err(CoreError::config(
                "handle_time_mean",
                format!("{} minutes is shorter than one second", self.handle_time_mean),
            ));
        }
        self.hourly_volume_share.validate("hourly_volume_share")?;
        self.hourly_staffing_target.validate("hourly_staffing_target")?;
        if let Some(forecast) = &self.hourly_forecast {
            for (hour, &v) in forecast.iter().enumerate() {
                non_negative(&format!("hourly_forecast[{hour}]"), v)?;
            }
        }
        Ok(())
    }
}

fn non_negative(field: &str, v: f64) -> CoreResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(CoreError::config(field, format!("{v} must be a finite, non-negative number")));
    }
    Ok(())
}

// ── File record ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    agent_starts:           i64,
    interactions_mean:      f64,
    #[serde(default)]
    interactions_stdev:     f64,
    handle_time_mean:       f64,
    #[serde(default)]
    handle_time_stdev:      f64,
    #[serde(default)]
    hourly_volume_share:    Option<BTreeMap<String, f64>>,
    #[serde(default)]
    hourly_staffing_target: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    enable_randomization:   bool,
    #[serde(default)]
    seed:                   u64,
    #[serde(default)]
    hourly_forecast:        Option<Vec<f64>>,
}

impl TryFrom<ConfigFile> for CenterConfig {
    type Error = CoreError;

    fn try_from(file: ConfigFile) -> CoreResult<Self> {
        let defaults = CenterConfig::default();

        let agent_starts = u32::try_from(file.agent_starts).map_err(|_| {
            CoreError::config("agent_starts", format!("{} is not a valid agent count", file.agent_starts))
        })?;

        let hourly_volume_share = match &file.hourly_volume_share {
            Some(map) => HourlyCurve::from_map("hourly_volume_share", map)?,
            None => defaults.hourly_volume_share,
        };
        let hourly_staffing_target = match &file.hourly_staffing_target {
            Some(map) => HourlyCurve::from_map("hourly_staffing_target", map)?,
            None => defaults.hourly_staffing_target,
        };

        let hourly_forecast = match file.hourly_forecast {
            None => None,
            Some(v) => Some(<[f64; DAY_HOURS]>::try_from(v.as_slice()).map_err(|_| {
                CoreError::config("hourly_forecast", format!("expected {DAY_HOURS} values, got {}", v.len()))
            })?),
        };

        Ok(CenterConfig {
            agent_starts,
            interactions_mean: file.interactions_mean,
            interactions_stdev: file.interactions_stdev,
            handle_time_mean: file.handle_time_mean,
            handle_time_stdev: file.handle_time_stdev,
            hourly_volume_share,
            hourly_staffing_target,
            enable_randomization: file.enable_randomization,
            seed: file.seed,
            hourly_forecast,
        })
    }
}
