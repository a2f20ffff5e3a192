//! Interaction arrivals.
//!
//! For each hour the generator plans a number of interactions, turns it into
//! a mean spacing, and then places arrivals with a little jitter so they are
//! not perfectly periodic:
//!
//! ```text
//! planned  = floor(interactions_today × volume_share[hour] × CORRECTION_FACTOR)
//! interval = floor(3600 / planned)
//! gap      ~ Uniform{interval − 1, interval, interval + 1}
//! ```
//!
//! The first arrival lands on the hour itself and each later one follows a
//! jittered gap, so an hour delivers its planned count.  Placement stops at
//! `planned` arrivals or at the horizon, whichever comes first.  An hour with
//! `planned == 0` produces no arrivals at all.

use cc_core::{CenterConfig, HourlyCurve, SimClock, SimRng, SimTime, DAY_HOURS, HOUR_SECS};

/// Compensates for the volume lost by flooring each hour's planned count.
pub const CORRECTION_FACTOR: f64 = 1.0112;

/// The arrivals planned for one hour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourlyArrivals {
    pub hour:     usize,
    /// Interactions the hour was planned for.
    pub planned:  u64,
    /// Mean spacing in seconds; `None` for a zero-arrival hour.
    pub interval: Option<u64>,
    /// Arrival instants, ascending, all inside the hour.
    pub times:    Vec<SimTime>,
}

/// Produces arrival times from a daily volume and an hourly share curve, or
/// from an external per-hour forecast.
#[derive(Clone, Debug)]
pub struct ArrivalGenerator {
    share:      HourlyCurve,
    forecast:   Option<[f64; DAY_HOURS]>,
    correction: f64,
    mean:       f64,
    stdev:      f64,
    randomize:  bool,
}

impl ArrivalGenerator {
    /// A generator for a fixed daily volume shaped by `share`.
    pub fn new(share: HourlyCurve) -> Self {
        Self {
            share,
            forecast:   None,
            correction: CORRECTION_FACTOR,
            mean:       0.0,
            stdev:      0.0,
            randomize:  false,
        }
    }

    pub fn from_config(config: &CenterConfig) -> Self {
        Self {
            share:      config.hourly_volume_share,
            forecast:   config.hourly_forecast,
            correction: CORRECTION_FACTOR,
            mean:       config.interactions_mean,
            stdev:      config.interactions_stdev,
            randomize:  config.enable_randomization,
        }
    }

    /// Override the rounding correction factor.
    pub fn with_correction(mut self, correction: f64) -> Self {
        self.correction = correction;
        self
    }

    /// Use externally forecast per-hour counts instead of the share curve.
    pub fn with_forecast(mut self, forecast: [f64; DAY_HOURS]) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Today's expected interaction volume.
    ///
    /// With a forecast this is the sum of the forecast hours.  Otherwise it is
    /// the configured mean, or a normal draw around it when randomisation is
    /// enabled.
    pub fn interactions_today(&self, rng: &mut SimRng) -> u64 {
        if let Some(forecast) = &self.forecast {
            return forecast.iter().map(|v| v.floor().max(0.0) as u64).sum();
        }
        let volume = if self.randomize {
            rng.normal(self.mean, self.stdev)
        } else {
            self.mean
        };
        volume.floor().max(0.0) as u64
    }

    /// Interactions planned for `hour`.
    pub fn planned_interactions(&self, interactions_today: u64, hour: usize) -> u64 {
        match &self.forecast {
            Some(forecast) => forecast
                .get(hour)
                .map(|v| v.floor().max(0.0) as u64)
                .unwrap_or(0),
            None => {
                let planned = interactions_today as f64 * self.share.get(hour) * self.correction;
                planned.floor().max(0.0) as u64
            }
        }
    }

    /// Mean spacing between arrivals for `planned` interactions in one hour.
    ///
    /// `None` when nothing is planned.  Never less than one second.
    pub fn mean_interval(planned: u64) -> Option<u64> {
        if planned == 0 {
            return None;
        }
        Some((HOUR_SECS / planned).max(1))
    }

    /// Place this hour's arrivals.
    pub fn arrivals_for_hour(
        &self,
        interactions_today: u64,
        hour:               usize,
        rng:                &mut SimRng,
    ) -> HourlyArrivals {
        let planned = self.planned_interactions(interactions_today, hour);
        let interval = Self::mean_interval(planned);

        let mut times = Vec::with_capacity(planned as usize);
        if let Some(interval) = interval {
            let window = SimClock::for_hour(hour);
            let mut t = window.now;
            while (times.len() as u64) < planned && t < window.horizon {
                times.push(t);
                t = t + rng.gen_range(interval - 1..=interval + 1);
            }
        }

        log::debug!(
            "hour {hour}: planned {planned} interactions, interval {interval:?}, placed {}",
            times.len()
        );
        HourlyArrivals { hour, planned, interval, times }
    }
}
