//! One customer interaction and its lifecycle.
//!
//! ```text
//! Arrived ──enqueue──▶ Queued ──start──▶ InService ──complete──▶ Completed
//!                        ▲                   │
//!                        └────preempt────────┘
//! ```
//!
//! `preempt` is only used at an hour boundary when the roster shrinks below
//! the number of customers in service.  A preempted customer keeps its
//! original service start and the service time already given.

use std::fmt;

use cc_core::{CustomerId, SimTime};

use crate::{SimError, SimResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CustomerState {
    Arrived,
    Queued,
    InService,
    Completed,
}

impl fmt::Display for CustomerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CustomerState::Arrived   => "arrived",
            CustomerState::Queued    => "queued",
            CustomerState::InService => "in-service",
            CustomerState::Completed => "completed",
        };
        f.write_str(s)
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id:            CustomerId,
    pub state:         CustomerState,
    pub arrived_at:    SimTime,
    pub queued_at:     Option<SimTime>,
    /// First time an agent picked this customer up.
    pub service_start: Option<SimTime>,
    /// Full handle time for this interaction, in seconds.
    pub service_secs:  u64,
    /// Handle time already given, across every hour so far.  Never exceeds
    /// `service_secs`.
    pub served_secs:   u64,
}

impl Customer {
    pub fn new(id: CustomerId, arrived_at: SimTime, service_secs: u64) -> Self {
        Self {
            id,
            state: CustomerState::Arrived,
            arrived_at,
            queued_at: None,
            service_start: None,
            service_secs,
            served_secs: 0,
        }
    }

    /// Handle time still owed.  Zero once the full handle time has been given.
    #[inline]
    pub fn remaining_secs(&self) -> u64 {
        self.service_secs.saturating_sub(self.served_secs)
    }

    pub fn enqueue(&mut self, at: SimTime) -> SimResult<()> {
        self.transition(CustomerState::Arrived, CustomerState::Queued)?;
        self.queued_at = Some(at);
        Ok(())
    }

    /// Take a slot.  Returns `true` for a first start, `false` when a
    /// preempted customer resumes.
    pub fn start(&mut self, at: SimTime) -> SimResult<bool> {
        self.transition(CustomerState::Queued, CustomerState::InService)?;
        if self.service_start.is_some() {
            return Ok(false);
        }
        self.service_start = Some(at);
        Ok(true)
    }

    /// Give back the slot with service still owed.
    pub fn preempt(&mut self) -> SimResult<()> {
        self.transition(CustomerState::InService, CustomerState::Queued)
    }

    /// Credit `secs` of service given by an agent.  Credit stops at the
    /// handle time, so a customer is never charged more than once over.
    pub fn credit(&mut self, secs: u64) {
        self.served_secs += secs.min(self.remaining_secs());
    }

    /// Finish the interaction at `at`.
    pub fn complete(&mut self, at: SimTime) -> SimResult<CompletedInteraction> {
        self.transition(CustomerState::InService, CustomerState::Completed)?;
        let (Some(queued_at), Some(service_start)) = (self.queued_at, self.service_start) else {
            return Err(SimError::invariant(
                format!("{} completed without queue entry or service start", self.id),
                &*self,
            ));
        };
        Ok(CompletedInteraction {
            id:            self.id,
            arrived_at:    self.arrived_at,
            queued_at,
            service_start,
            service_end:   at,
            service_secs:  self.service_secs,
            charged_secs:  self.served_secs,
        })
    }

    fn transition(&mut self, from: CustomerState, to: CustomerState) -> SimResult<()> {
        if self.state != from {
            return Err(SimError::invariant(
                format!("{} cannot move {} → {to}; it is {}", self.id, from, self.state),
                &*self,
            ));
        }
        self.state = to;
        Ok(())
    }
}

// ── CompletedInteraction ──────────────────────────────────────────────────────

/// The record left behind by a completed customer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedInteraction {
    pub id:            CustomerId,
    pub arrived_at:    SimTime,
    pub queued_at:     SimTime,
    pub service_start: SimTime,
    pub service_end:   SimTime,
    /// The interaction's handle time.
    pub service_secs:  u64,
    /// Service time actually charged across all hours.
    pub charged_secs:  u64,
}

impl CompletedInteraction {
    /// Seconds from queue entry to service end.
    #[inline]
    pub fn wait_secs(&self) -> u64 {
        self.service_end.since(self.queued_at)
    }
}
