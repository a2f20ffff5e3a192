//! `ServiceStation` — one simulated hour of the agent pool.
//!
//! # Event loop
//!
//! ```text
//! open(hour, capacity, carryover)
//!   ① in-service carryover takes slots first (earliest service start first);
//!     any excess over capacity is preempted to the queue front
//!   ② queued carryover joins the queue behind them, order preserved
//!   ③ free slots are filled from the queue front
//! admit_arrivals(customers)          → one Arrival event each
//! run()
//!   loop: pop next event before 60:00
//!     Arrival(c)     → c joins the queue tail
//!     ServiceEnd(id) → slot released, interaction completed
//!     fill free slots from the queue front
//!   close: everything unfinished becomes the next hour's Carryover
//! ```
//!
//! Events due exactly at the horizon are not processed; a customer whose
//! service would end at 60:00 is carried with nothing left to serve and
//! completes at the very start of the next hour.
//!
//! # Invariants checked at every event
//!
//! - slots in use ≤ capacity
//! - a first service start never overtakes an earlier queue entry
//! - carried queue markers agree with queue entry times

use std::collections::VecDeque;

use cc_core::{CustomerId, SimClock, SimTime};
use cc_schedule::EventQueue;

use crate::carryover::{ActiveCustomer, Carryover, QueuedCustomer};
use crate::customer::{CompletedInteraction, Customer};
use crate::{SimError, SimResult};

#[derive(Debug)]
enum StationEvent {
    Arrival(Customer),
    ServiceEnd(CustomerId),
}

#[derive(Debug)]
struct Waiting {
    customer:     Customer,
    /// Seconds already waited when this hour opened; `None` for customers
    /// that queued during this hour.
    waited_prior: Option<u64>,
}

#[derive(Debug)]
struct Slot {
    customer:   Customer,
    /// When the current stretch of service began.
    resumed_at: SimTime,
}

/// What happened during one simulated hour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourOutcome {
    pub hour:               usize,
    /// Agent slots available this hour.
    pub capacity:           usize,
    /// Customers re-admitted from the previous hour.
    pub admitted_carryover: usize,
    /// New customers that arrived during the hour.
    pub arrived:            usize,
    /// First service starts during the hour.
    pub started:            usize,
    /// In-service customers sent back to the queue at the hour start.
    pub preempted:          usize,
    pub completed:          Vec<CompletedInteraction>,
    pub carryover:          Carryover,
}

// ── ServiceStation ────────────────────────────────────────────────────────────

/// A bounded pool of agent slots with a FIFO waiting queue.
#[derive(Debug)]
pub struct ServiceStation {
    hour:               usize,
    capacity:           usize,
    clock:              SimClock,
    events:             EventQueue<StationEvent>,
    queue:              VecDeque<Waiting>,
    slots:              Vec<Slot>,
    completed:          Vec<CompletedInteraction>,
    last_fresh_entry:   Option<SimTime>,
    admitted_carryover: usize,
    arrived:            usize,
    started:            usize,
    preempted:          usize,
}

impl ServiceStation {
    /// Open the station for `hour` with `capacity` agents and re-admit the
    /// previous hour's unfinished work.
    pub fn open(hour: usize, capacity: usize, carryover: Carryover) -> SimResult<Self> {
        let mut station = Self {
            hour,
            capacity,
            clock:              SimClock::for_hour(hour),
            events:             EventQueue::new(),
            queue:              VecDeque::new(),
            slots:              Vec::with_capacity(capacity),
            completed:          Vec::new(),
            last_fresh_entry:   None,
            admitted_carryover: carryover.len(),
            arrived:            0,
            started:            0,
            preempted:          0,
        };
        if capacity == 0 {
            return Err(SimError::invariant(
                format!("hour {hour} opened with no agent slots"),
                &station,
            ));
        }

        let Carryover { queued, mut in_service } = carryover;
        in_service.sort_by_key(|a| (a.customer.service_start, a.customer.id));

        let now = station.clock.now;
        let excess = in_service.split_off(in_service.len().min(capacity));
        for ActiveCustomer { customer } in in_service {
            station.resume(customer, now);
        }
        for ActiveCustomer { mut customer } in excess {
            customer.preempt()?;
            let waited_prior = customer.queued_at.map_or(0, |at| now.since(at));
            station.queue.push_back(Waiting { customer, waited_prior: Some(waited_prior) });
            station.preempted += 1;
        }
        if station.preempted > 0 {
            log::debug!(
                "hour {hour}: {} in-service customers returned to the queue, {capacity} slots",
                station.preempted
            );
        }
        for QueuedCustomer { customer, waited_secs } in queued {
            station.queue.push_back(Waiting { customer, waited_prior: Some(waited_secs) });
        }

        station.fill_slots()?;
        Ok(station)
    }

    /// Schedule this hour's new arrivals.  Every arrival must fall inside the
    /// hour.
    pub fn admit_arrivals(&mut self, arrivals: impl IntoIterator<Item = Customer>) -> SimResult<()> {
        for customer in arrivals {
            if !self.clock.contains(customer.arrived_at) {
                return Err(SimError::invariant(
                    format!(
                        "{} arrives at {} outside {}",
                        customer.id, customer.arrived_at, self.clock
                    ),
                    &*self,
                ));
            }
            self.events.push(customer.arrived_at, StationEvent::Arrival(customer));
        }
        Ok(())
    }

    /// Run the hour to its horizon and hand back the outcome.
    pub fn run(mut self) -> SimResult<HourOutcome> {
        while let Some((at, event)) = self.events.pop_before(self.clock.horizon) {
            if !self.clock.advance_to(at) {
                return Err(SimError::invariant(
                    format!("event at {at} is behind the clock"),
                    &self,
                ));
            }
            match event {
                StationEvent::Arrival(mut customer) => {
                    customer.enqueue(at)?;
                    self.queue.push_back(Waiting { customer, waited_prior: None });
                    self.arrived += 1;
                }
                StationEvent::ServiceEnd(id) => self.finish(id, at)?,
            }
            self.fill_slots()?;
        }
        self.close()
    }

    /// Open, admit, and run in one call.
    pub fn run_hour(
        hour:      usize,
        capacity:  usize,
        carryover: Carryover,
        arrivals:  impl IntoIterator<Item = Customer>,
    ) -> SimResult<HourOutcome> {
        let mut station = Self::open(hour, capacity, carryover)?;
        station.admit_arrivals(arrivals)?;
        station.run()
    }

    pub fn in_service(&self) -> usize {
        self.slots.len()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.slots.len())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Put an in-service customer into a slot and schedule its end.
    fn resume(&mut self, customer: Customer, now: SimTime) {
        let end = now + customer.remaining_secs();
        self.events.push(end, StationEvent::ServiceEnd(customer.id));
        self.slots.push(Slot { customer, resumed_at: now });
    }

    fn fill_slots(&mut self) -> SimResult<()> {
        let now = self.clock.now;
        while self.slots.len() < self.capacity {
            let Some(Waiting { mut customer, .. }) = self.queue.pop_front() else {
                break;
            };
            if customer.start(now)? {
                self.check_fifo(&customer)?;
                self.started += 1;
            }
            self.resume(customer, now);
        }
        if self.slots.len() > self.capacity {
            return Err(SimError::invariant(
                format!("{} slots in use with {} agents", self.slots.len(), self.capacity),
                &*self,
            ));
        }
        Ok(())
    }

    fn check_fifo(&mut self, customer: &Customer) -> SimResult<()> {
        let entry = customer.queued_at;
        if let (Some(last), Some(entry)) = (self.last_fresh_entry, entry) {
            if entry < last {
                return Err(SimError::invariant(
                    format!(
                        "{} queued at {entry} started after a customer queued at {last}",
                        customer.id
                    ),
                    &*self,
                ));
            }
        }
        self.last_fresh_entry = entry;
        Ok(())
    }

    fn finish(&mut self, id: CustomerId, at: SimTime) -> SimResult<()> {
        let Some(idx) = self.slots.iter().position(|s| s.customer.id == id) else {
            return Err(SimError::invariant(
                format!("service end for {id}, which holds no slot"),
                &*self,
            ));
        };
        let Slot { mut customer, resumed_at } = self.slots.remove(idx);
        customer.credit(at.since(resumed_at));
        self.completed.push(customer.complete(at)?);
        Ok(())
    }

    fn close(mut self) -> SimResult<HourOutcome> {
        let horizon = self.clock.horizon;
        for (at, event) in self.events.drain() {
            if let StationEvent::Arrival(customer) = event {
                return Err(SimError::invariant(
                    format!("{} still pending at {at} when the hour closed", customer.id),
                    &self,
                ));
            }
        }

        let mut in_service: Vec<ActiveCustomer> = self
            .slots
            .drain(..)
            .map(|Slot { mut customer, resumed_at }| {
                customer.credit(horizon.since(resumed_at));
                ActiveCustomer { customer }
            })
            .collect();
        in_service.sort_by_key(|a| (a.customer.service_start, a.customer.id));

        let queued = self
            .queue
            .drain(..)
            .map(|w| QueuedCustomer::carry(w.customer, w.waited_prior, horizon))
            .collect::<SimResult<Vec<_>>>()?;

        Ok(HourOutcome {
            hour:               self.hour,
            capacity:           self.capacity,
            admitted_carryover: self.admitted_carryover,
            arrived:            self.arrived,
            started:            self.started,
            preempted:          self.preempted,
            completed:          self.completed,
            carryover:          Carryover { queued, in_service },
        })
    }
}
