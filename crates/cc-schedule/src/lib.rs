//! `cc-schedule` — event queue, staffing, and arrivals.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<E>` (`BTreeMap<SimTime, VecDeque<E>>`)        |
//! | [`staffing`]    | `StaffingScheduler`, `Roster`, `Agent`, `ShiftOrigin`     |
//! | [`arrivals`]    | `ArrivalGenerator`, `HourlyArrivals`, `CORRECTION_FACTOR` |
//! | [`loader`]      | `load_curves_csv`, `load_curves_reader`                   |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Hourly model (summary)
//!
//! ```text
//! for hour in 0..24:
//!   roster       = StaffingScheduler::staff_hour(hour)    // bench → on-duty agents
//!   arrivals     = ArrivalGenerator::arrivals_for_hour(…) // gaps ≈ 3600 / planned
//!   events       = EventQueue ordered by (time, submission order)
//! ```

pub mod arrivals;
pub mod error;
pub mod event_queue;
pub mod loader;
pub mod staffing;


pub use arrivals::{ArrivalGenerator, HourlyArrivals, CORRECTION_FACTOR};
pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::EventQueue;
pub use loader::{load_curves_csv, load_curves_reader, CurveTable};
pub use staffing::{Agent, Roster, ShiftOrigin, StaffingDecision, StaffingScheduler};
