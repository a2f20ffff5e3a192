//! `EventQueue` — the logical-time event scheduler.
//!
//! # Ordering
//!
//! Events are keyed by [`SimTime`].  Events sharing a timestamp are kept in a
//! `VecDeque` in submission order, so popping always yields the earliest
//! timestamp first and, within one timestamp, the event pushed first.  This
//! tie-break is what gives queue admission its first-come-first-served
//! fairness.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct
//! pending timestamps.  Within one simulated hour W is bounded by the number
//! of outstanding arrivals plus the number of occupied agent slots.

use std::collections::{BTreeMap, VecDeque};

use cc_core::SimTime;

/// A priority queue mapping logical timestamps → events due at that instant.
#[derive(Debug)]
pub struct EventQueue<E> {
    inner: BTreeMap<SimTime, VecDeque<E>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `at`, behind anything already due at `at`.
    pub fn push(&mut self, at: SimTime, event: E) {
        self.inner.entry(at).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the next event in (time, submission) order.
    pub fn pop_next(&mut self) -> Option<(SimTime, E)> {
        let mut entry = self.inner.first_entry()?;
        let at = *entry.key();
        let event = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        let event = event?;
        self.total -= 1;
        Some((at, event))
    }

    /// Like [`pop_next`][Self::pop_next], but only if the event is due
    /// strictly before `horizon`.
    pub fn pop_before(&mut self, horizon: SimTime) -> Option<(SimTime, E)> {
        match self.next_time() {
            Some(at) if at < horizon => self.pop_next(),
            _ => None,
        }
    }

    /// The earliest pending timestamp, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Remove every pending event, in (time, submission) order.
    pub fn drain(&mut self) -> Vec<(SimTime, E)> {
        let inner = std::mem::take(&mut self.inner);
        self.total = 0;
        inner
            .into_iter()
            .flat_map(|(at, events)| events.into_iter().map(move |e| (at, e)))
            .collect()
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
