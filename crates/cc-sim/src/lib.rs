//! `cc-sim` — the hourly simulation loop for the contact-center simulator.
//!
//! # Hour-chunked day
//!
//! ```text
//! for hour in 0..24:
//!   ① Staffing   — on-duty count from the StaffingScheduler
//!   ② Arrivals   — new customers for the hour
//!   ③ Station    — carryover re-admitted first, then arrivals; event loop
//!                  to 60:00 with FIFO slot assignment
//!   ④ Carryover  — queued and in-service customers handed to the next hour
//! after hour 23:
//!   MetricsCollector → DaySummary (ASR over every wait, utilization)
//! ```
//!
//! Internal inconsistencies (slots over capacity, FIFO overtaking, corrupt
//! carry markers) abort the run with [`SimError::Invariant`] and a state
//! dump; configuration problems surface as [`SimError::Config`] before hour 0.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs sweep days on Rayon's thread pool.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_core::CenterConfig;
//! use cc_sim::{DayDriver, NoopObserver};
//!
//! let day = DayDriver::new(CenterConfig::default())?.run(&mut NoopObserver)?;
//! println!("ASR {:.1} min", day.asr_minutes);
//! ```

pub mod carryover;
pub mod customer;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod station;
pub mod summary;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use carryover::{ActiveCustomer, Carryover, QueuedCustomer};
pub use customer::{CompletedInteraction, Customer, CustomerState};
pub use driver::{run_day, DayDriver, SimulationState};
pub use error::{SimError, SimResult};
pub use metrics::{MetricsCollector, UTILIZATION_SATURATION};
pub use observer::{DayObserver, NoopObserver, RecordingObserver};
pub use station::{HourOutcome, ServiceStation};
pub use summary::{DaySummary, HourSummary};
pub use sweep::{run_configs, ForecastSpectrum, Spectrum, Steps};
