//! `cc-core` — foundational types for the contact-center simulator.
//!
//! This crate is a dependency of every other `cc-*` crate.  It has no `cc-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `AgentId`, `CustomerIds` allocator      |
//! | [`time`]        | `SimTime`, `SimClock`, hour/day constants             |
//! | [`rng`]         | `SimRng` (seeded, with child streams)                 |
//! | [`config`]      | `CenterConfig`, `HourlyCurve`, curve tolerance       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CenterConfig, HourlyCurve, CURVE_TOLERANCE};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, CustomerId, CustomerIds};
pub use rng::SimRng;
pub use time::{SimClock, SimTime, DAY_HOURS, DAY_SECS, HOUR_SECS, SHIFT_HOURS};
