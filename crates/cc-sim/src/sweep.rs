//! Parameter sweeps: many independent days over a grid of inputs.
//!
//! Every configuration in a sweep is validated before the first day runs.
//! Days are independent, so with the `parallel` feature they run on Rayon's
//! thread pool; records are always replayed to the observer in grid order,
//! so the output is identical either way.

use std::ops::RangeInclusive;

use cc_core::CenterConfig;

use crate::observer::RecordingObserver;
use crate::summary::DaySummary;
use crate::{DayDriver, DayObserver, SimResult};

/// An inclusive stepped range of floating-point values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steps {
    pub min:  f64,
    pub max:  f64,
    pub step: f64,
}

impl Steps {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// A single value.
    pub fn single(v: f64) -> Self {
        Self { min: v, max: v, step: 1.0 }
    }

    /// Every value from `min` to `max` inclusive.  A non-positive step yields
    /// just `min`.
    pub fn values(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.max <= self.min {
            return vec![self.min];
        }
        let count = ((self.max - self.min) / self.step + 1e-9).floor() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

// ── Spectrum ──────────────────────────────────────────────────────────────────

/// The full product of handle time × daily volume × agent starts.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub base:           CenterConfig,
    /// Handle time in minutes.
    pub handle_minutes: Steps,
    pub interactions:   Steps,
    pub agent_starts:   RangeInclusive<u32>,
    /// Days run per grid point.  Each repeat gets its own seed.
    pub repeats:        u32,
}

impl Spectrum {
    /// One configuration per day, in grid order.
    pub fn configs(&self) -> Vec<CenterConfig> {
        let mut configs = Vec::new();
        for handle in self.handle_minutes.values() {
            for interactions in self.interactions.values() {
                for starts in self.agent_starts.clone() {
                    for _ in 0..self.repeats.max(1) {
                        let seed = self.base.seed.wrapping_add(configs.len() as u64);
                        configs.push(CenterConfig {
                            handle_time_mean:  handle,
                            interactions_mean: interactions,
                            agent_starts:      starts,
                            seed,
                            ..self.base.clone()
                        });
                    }
                }
            }
        }
        configs
    }

    pub fn run<O: DayObserver>(&self, observer: &mut O) -> SimResult<Vec<DaySummary>> {
        run_configs(self.configs(), observer)
    }
}

// ── ForecastSpectrum ──────────────────────────────────────────────────────────

/// Forecast daily volumes × agent starts, one day each.
#[derive(Clone, Debug)]
pub struct ForecastSpectrum {
    pub base:          CenterConfig,
    /// Forecast interactions per day; rounded to whole interactions.
    pub daily_volumes: Vec<f64>,
    pub agent_starts:  RangeInclusive<u32>,
}

impl ForecastSpectrum {
    pub fn configs(&self) -> Vec<CenterConfig> {
        let mut configs = Vec::new();
        for &volume in &self.daily_volumes {
            for starts in self.agent_starts.clone() {
                configs.push(CenterConfig {
                    interactions_mean: volume.round(),
                    agent_starts:      starts,
                    ..self.base.clone()
                });
            }
        }
        configs
    }

    pub fn run<O: DayObserver>(&self, observer: &mut O) -> SimResult<Vec<DaySummary>> {
        run_configs(self.configs(), observer)
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Run one day per configuration and replay the records to `observer` in
/// input order.
pub fn run_configs<O: DayObserver>(
    configs:  Vec<CenterConfig>,
    observer: &mut O,
) -> SimResult<Vec<DaySummary>> {
    let drivers = configs
        .into_iter()
        .map(DayDriver::new)
        .collect::<SimResult<Vec<_>>>()?;
    log::info!("sweep: {} days", drivers.len());

    let recorded = run_drivers(&drivers)?;

    let mut days = Vec::with_capacity(recorded.len());
    for record in recorded {
        for hour in &record.hours {
            observer.on_hour_end(hour);
        }
        for day in record.days {
            observer.on_day_end(&day);
            days.push(day);
        }
    }
    observer.on_run_end();
    Ok(days)
}

fn run_recorded(driver: &DayDriver) -> SimResult<RecordingObserver> {
    let mut recorder = RecordingObserver::default();
    driver.run(&mut recorder)?;
    Ok(recorder)
}

#[cfg(not(feature = "parallel"))]
fn run_drivers(drivers: &[DayDriver]) -> SimResult<Vec<RecordingObserver>> {
    drivers.iter().map(run_recorded).collect()
}

#[cfg(feature = "parallel")]
fn run_drivers(drivers: &[DayDriver]) -> SimResult<Vec<RecordingObserver>> {
    use rayon::prelude::*;

    drivers.par_iter().map(run_recorded).collect()
}
