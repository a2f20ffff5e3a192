//! `DayDriver` — 24 sequential one-hour simulations.
//!
//! # Per-hour pipeline
//!
//! ```text
//! for hour in 0..24:
//!   ① Staffing  — StaffingScheduler::staff_hour → on-duty count
//!   ② Arrivals  — ArrivalGenerator places the hour's arrivals; each new
//!                 customer gets the next identity and a handle time
//!   ③ Service   — ServiceStation runs the hour, carryover first
//!   ④ Metrics   — completions recorded; HourSummary to the observer
//!   ⑤ Carryover — unfinished work is handed to the next hour
//! ```
//!
//! Each call to [`DayDriver::run`] builds a fresh [`SimulationState`]; no
//! state survives from one day to the next.

use cc_core::{CenterConfig, CustomerIds, SimRng, DAY_HOURS};
use cc_schedule::{ArrivalGenerator, StaffingScheduler};

use crate::carryover::Carryover;
use crate::customer::Customer;
use crate::metrics::MetricsCollector;
use crate::station::ServiceStation;
use crate::summary::{DaySummary, HourSummary};
use crate::{DayObserver, SimError, SimResult};

// RNG stream ids.
const VOLUME_STREAM:  u64 = 0;
const ARRIVAL_STREAM: u64 = 1;
const HANDLE_STREAM:  u64 = 2;

/// Everything that changes while one day is simulated.
pub struct SimulationState {
    pub staffing:           StaffingScheduler,
    pub ids:                CustomerIds,
    pub carryover:          Carryover,
    pub metrics:            MetricsCollector,
    pub interactions_today: u64,
    arrival_rng:            SimRng,
    handle_rng:             SimRng,
}

impl SimulationState {
    fn new(config: &CenterConfig, generator: &ArrivalGenerator) -> Self {
        let mut root = SimRng::new(config.seed);
        let mut volume_rng = root.child(VOLUME_STREAM);
        let arrival_rng = root.child(ARRIVAL_STREAM);
        let handle_rng = root.child(HANDLE_STREAM);
        Self {
            staffing:           StaffingScheduler::from_config(config),
            ids:                CustomerIds::new(),
            carryover:          Carryover::default(),
            metrics:            MetricsCollector::new(),
            interactions_today: generator.interactions_today(&mut volume_rng),
            arrival_rng,
            handle_rng,
        }
    }
}

// ── DayDriver ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct DayDriver {
    config:    CenterConfig,
    generator: ArrivalGenerator,
}

impl DayDriver {
    /// Validate `config` and prepare a driver.  Configuration errors are
    /// reported here, before any hour runs.
    pub fn new(config: CenterConfig) -> SimResult<Self> {
        config.validate()?;
        let generator = ArrivalGenerator::from_config(&config);
        Ok(Self { config, generator })
    }

    /// Override the arrival rounding correction factor.
    pub fn with_correction(mut self, correction: f64) -> Self {
        self.generator = self.generator.with_correction(correction);
        self
    }

    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    /// Simulate one full day.
    pub fn run<O: DayObserver>(&self, observer: &mut O) -> SimResult<DaySummary> {
        let config = &self.config;
        let mut state = SimulationState::new(config, &self.generator);
        let today = state.interactions_today;
        log::debug!(
            "day start: {} agent starts, {today} interactions planned",
            config.agent_starts
        );

        for hour in 0..DAY_HOURS {
            let summary = self.run_hour(&mut state, hour)?;
            observer.on_hour_end(&summary);
        }

        let unfinished = state.carryover.len();
        let metrics = &state.metrics;
        if metrics.arrived() != metrics.completed() + unfinished as u64 {
            return Err(SimError::invariant(
                format!(
                    "{} arrived but {} completed and {unfinished} unfinished",
                    metrics.arrived(),
                    metrics.completed()
                ),
                &state.carryover,
            ));
        }

        let handle_secs = config.handle_time_secs();
        let day = DaySummary {
            agent_starts:           config.agent_starts,
            interactions_estimated: today,
            arrived:                metrics.arrived(),
            handled:                metrics.completed(),
            handle_time_minutes:    handle_secs as f64 / 60.0,
            asr_minutes:            metrics.asr_minutes(),
            utilization:            metrics.utilization(config.agent_starts, handle_secs),
            unfinished,
        };
        log::info!(
            "day done: {} agent starts, {}/{} handled, ASR {:.2} min, utilization {:.3}, {} unfinished",
            day.agent_starts, day.handled, day.arrived, day.asr_minutes, day.utilization, day.unfinished
        );
        observer.on_day_end(&day);
        Ok(day)
    }

    fn run_hour(&self, state: &mut SimulationState, hour: usize) -> SimResult<HourSummary> {
        let staffing = state.staffing.staff_hour(hour)?;
        let planned = self
            .generator
            .arrivals_for_hour(state.interactions_today, hour, &mut state.arrival_rng);

        let mut customers = Vec::with_capacity(planned.times.len());
        for &at in &planned.times {
            let service_secs = self.draw_handle_secs(&mut state.handle_rng);
            customers.push(Customer::new(state.ids.issue(), at, service_secs));
        }

        let carryover = std::mem::take(&mut state.carryover);
        let carried_in = carryover.len();
        let outcome = ServiceStation::run_hour(hour, staffing.on_duty, carryover, customers)?;
        if outcome.admitted_carryover != carried_in {
            return Err(SimError::invariant(
                format!(
                    "hour {hour} admitted {} carried customers, {carried_in} were handed over",
                    outcome.admitted_carryover
                ),
                &outcome,
            ));
        }

        state.metrics.record_arrivals(outcome.arrived);
        for interaction in &outcome.completed {
            state.metrics.record(interaction);
        }

        let summary = HourSummary {
            hour,
            agent_starts:           self.config.agent_starts,
            agents_working:         staffing.on_duty,
            bench:                  staffing.bench,
            fallback:               staffing.fallback,
            interactions_estimated: planned.planned,
            arrived:                outcome.arrived,
            handled:                outcome.completed.len(),
            handled_total:          state.metrics.completed(),
            asr_minutes:            state.metrics.asr_minutes(),
            queued_at_end:          outcome.carryover.queued.len(),
            in_service_at_end:      outcome.carryover.in_service.len(),
        };
        log::debug!(
            "hour {hour}: {} arrived, {} handled, {} queued and {} in service at close",
            summary.arrived, summary.handled, summary.queued_at_end, summary.in_service_at_end
        );
        state.carryover = outcome.carryover;
        Ok(summary)
    }

    /// One interaction's handle time, in whole seconds, never below 1.
    fn draw_handle_secs(&self, rng: &mut SimRng) -> u64 {
        if !self.config.enable_randomization {
            return self.config.handle_time_secs();
        }
        let mean = self.config.handle_time_mean * 60.0;
        let stdev = self.config.handle_time_stdev * 60.0;
        rng.normal(mean, stdev).floor().max(1.0) as u64
    }
}

/// Run one day for `config` and close the observer.
pub fn run_day<O: DayObserver>(config: CenterConfig, observer: &mut O) -> SimResult<DaySummary> {
    let day = DayDriver::new(config)?.run(observer)?;
    observer.on_run_end();
    Ok(day)
}
