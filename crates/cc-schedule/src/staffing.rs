//! Agent staffing: the bench, the roster, and the hourly staffing rules.
//!
//! # Daily staffing model
//!
//! ```text
//! hour 0      bench = agent_starts − 1; the overnight agent (4 h left) is on duty
//! hours 1–2   every agent loses an hour; agents reaching 0 leave
//! hours 3–21  lose an hour, then start agents from the bench toward the
//!             hour's on-duty target, each with a full 8 h shift
//! hour 22     roster becomes a single taper agent with 2 h left
//! hour 23     lose an hour
//! any hour    an empty roster gets one fallback agent
//! ```
//!
//! The on-duty target for hour *h* is
//! `floor(agent_starts × SHIFT_HOURS × staffing_target[h])`: the staffing
//! curve is each hour's share of the day's agent-hours.
//!
//! Shortfalls never raise.  If the bench cannot cover the target the hour is
//! simply staffed with whoever is left.

use std::fmt;

use cc_core::{AgentId, CenterConfig, HourlyCurve, DAY_HOURS, SHIFT_HOURS};

use crate::{ScheduleError, ScheduleResult};

/// Hours the overnight agent still has to work when the day begins.
pub const OVERNIGHT_HOURS: u32 = 4;

/// The hour at which the roster is cut down to the night agent.
pub const TAPER_HOUR: usize = 22;

/// Hours the night agent has left when the taper starts.
pub const TAPER_HOURS: u32 = 2;

/// First and last hour (inclusive) in which new agents may start.
pub const RAMP_HOURS: std::ops::RangeInclusive<usize> = 3..=21;

// ── Agent / Roster ────────────────────────────────────────────────────────────

/// Why an agent is on the roster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftOrigin {
    /// Carried over from the previous day's night shift.
    Overnight,
    /// Started from today's bench.
    Regular,
    /// The single agent covering the end-of-day taper.
    Taper,
    /// Substituted for an otherwise empty roster.
    Fallback,
}

impl fmt::Display for ShiftOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShiftOrigin::Overnight => "overnight",
            ShiftOrigin::Regular   => "regular",
            ShiftOrigin::Taper     => "taper",
            ShiftOrigin::Fallback  => "fallback",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub id:              AgentId,
    pub hours_remaining: u32,
    pub origin:          ShiftOrigin,
}

/// The agents on duty this hour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    agents: Vec<Agent>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Count of agents with the given origin.
    pub fn count_of(&self, origin: ShiftOrigin) -> usize {
        self.agents.iter().filter(|a| a.origin == origin).count()
    }

    /// Take one hour off every shift and drop agents whose shift is over.
    /// Returns how many agents left.
    fn tick_hour(&mut self) -> usize {
        let before = self.agents.len();
        for agent in &mut self.agents {
            agent.hours_remaining = agent.hours_remaining.saturating_sub(1);
        }
        self.agents.retain(|a| a.hours_remaining > 0);
        before - self.agents.len()
    }
}

// ── StaffingDecision ──────────────────────────────────────────────────────────

/// What the scheduler did for one hour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffingDecision {
    pub hour:      usize,
    /// Agents on duty after the decision.  Always at least 1.
    pub on_duty:   usize,
    /// Bench left after the decision.
    pub bench:     u32,
    /// Agents started from the bench this hour.
    pub started:   u32,
    /// Agents that would have started had the bench been deep enough.
    pub shortfall: u32,
    /// `true` if the fallback agent had to be substituted.
    pub fallback:  bool,
}

// ── StaffingScheduler ─────────────────────────────────────────────────────────

/// Owns the bench and the roster for one simulated day.
#[derive(Clone, Debug)]
pub struct StaffingScheduler {
    agent_starts: u32,
    target:       HourlyCurve,
    bench:        u32,
    roster:       Roster,
    next_agent:   AgentId,
}

impl StaffingScheduler {
    pub fn new(agent_starts: u32, target: HourlyCurve) -> Self {
        Self {
            agent_starts,
            target,
            bench:      0,
            roster:     Roster::default(),
            next_agent: AgentId(1),
        }
    }

    pub fn from_config(config: &CenterConfig) -> Self {
        Self::new(config.agent_starts, config.hourly_staffing_target)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bench(&self) -> u32 {
        self.bench
    }

    /// On-duty target for `hour` before bench limits are applied.
    ///
    /// The target curve is each hour's share of the day's agent-hours, so
    /// the target is `floor(agent_starts × SHIFT_HOURS × target[hour])`.
    pub fn ideal_on_duty(&self, hour: usize) -> u32 {
        let agent_hours = self.agent_starts as f64 * SHIFT_HOURS as f64;
        (agent_hours * self.target.get(hour)).floor() as u32
    }

    /// Apply the staffing rules for `hour` and return the outcome.
    ///
    /// Hours must be fed in order 0..=23; hour 0 resets the bench and roster.
    pub fn staff_hour(&mut self, hour: usize) -> ScheduleResult<StaffingDecision> {
        if hour >= DAY_HOURS {
            return Err(ScheduleError::UnknownHour(hour));
        }

        let mut started = 0;
        let mut shortfall = 0;

        match hour {
            0 => {
                self.bench = self.agent_starts.saturating_sub(1);
                self.roster = Roster::default();
                self.enlist(OVERNIGHT_HOURS, ShiftOrigin::Overnight);
            }
            TAPER_HOUR => {
                self.roster = Roster::default();
                self.enlist(TAPER_HOURS, ShiftOrigin::Taper);
            }
            h if RAMP_HOURS.contains(&h) => {
                self.roster.tick_hour();
                let ideal = self.ideal_on_duty(h);
                let current = self.roster.len() as u32;
                if ideal > current {
                    let wanted = ideal - current;
                    started = wanted.min(self.bench);
                    shortfall = wanted - started;
                    for _ in 0..started {
                        self.enlist(SHIFT_HOURS, ShiftOrigin::Regular);
                    }
                    self.bench -= started;
                    if shortfall > 0 {
                        log::warn!(
                            "hour {h}: bench exhausted, started {started} of {wanted} wanted agents"
                        );
                    }
                }
            }
            _ => {
                self.roster.tick_hour();
            }
        }

        let fallback = self.roster.is_empty();
        if fallback {
            log::warn!("hour {hour}: no agents on duty, substituting one fallback agent");
            self.enlist(1, ShiftOrigin::Fallback);
        }

        let decision = StaffingDecision {
            hour,
            on_duty: self.roster.len(),
            bench: self.bench,
            started,
            shortfall,
            fallback,
        };
        log::debug!(
            "hour {hour}: {} on duty, {} on bench, {} started",
            decision.on_duty, decision.bench, decision.started
        );
        Ok(decision)
    }

    fn enlist(&mut self, hours: u32, origin: ShiftOrigin) {
        let id = self.next_agent;
        self.next_agent = id.next();
        self.roster.agents.push(Agent { id, hours_remaining: hours, origin });
    }
}
