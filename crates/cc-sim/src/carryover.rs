//! State handed from one simulated hour to the next.
//!
//! # Hand-off rules
//!
//! ```text
//! queued at 60:00      → QueuedCustomer, waited_secs += 3600
//! in service at 60:00  → ActiveCustomer, served_secs includes this hour's share
//! ```
//!
//! The next hour re-admits in-service customers first, then queued ones in
//! their original order, and only then the hour's new arrivals.  Customers
//! keep their identity across the boundary; nothing is re-issued.

use cc_core::{SimTime, HOUR_SECS};

use crate::customer::Customer;
use crate::{SimError, SimResult};

/// A customer still waiting for an agent when the hour ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedCustomer {
    pub customer:    Customer,
    /// Seconds spent queued up to the end of the hour it was carried from.
    pub waited_secs: u64,
}

/// A customer mid-service when the hour ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveCustomer {
    pub customer: Customer,
}

impl ActiveCustomer {
    /// Service time the next hour still has to give.
    #[inline]
    pub fn remaining_secs(&self) -> u64 {
        self.customer.remaining_secs()
    }
}

/// Unfinished work at an hour boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carryover {
    /// In queue order; the front is served first.
    pub queued:     Vec<QueuedCustomer>,
    /// In service-start order.
    pub in_service: Vec<ActiveCustomer>,
}

impl Carryover {
    pub fn len(&self) -> usize {
        self.queued.len() + self.in_service.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty() && self.in_service.is_empty()
    }
}

impl QueuedCustomer {
    /// Carry `customer` past `horizon`.
    ///
    /// A customer that was already waiting when the hour began has its
    /// marker advanced by a full hour; one that queued during the hour has
    /// waited since its queue entry.  Either way the marker must agree with
    /// the queue entry, or the hand-off is corrupt.
    pub(crate) fn carry(
        customer:     Customer,
        waited_prior: Option<u64>,
        horizon:      SimTime,
    ) -> SimResult<Self> {
        let waited_secs = match (waited_prior, customer.queued_at) {
            (Some(prior), _) => prior + HOUR_SECS,
            (None, Some(at)) => horizon.since(at),
            (None, None) => 0,
        };
        let q = QueuedCustomer { customer, waited_secs };
        check_waited(&q, horizon)?;
        Ok(q)
    }
}

fn check_waited(q: &QueuedCustomer, horizon: SimTime) -> SimResult<()> {
    let expected = q.customer.queued_at.map(|at| horizon.since(at));
    if expected != Some(q.waited_secs) {
        return Err(SimError::invariant(
            format!(
                "{} carried with {} s waited, queue entry implies {expected:?}",
                q.customer.id, q.waited_secs
            ),
            q,
        ));
    }
    Ok(())
}
