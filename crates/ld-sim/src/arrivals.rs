//! `ArrivalQueue`: passengers keyed by the tick their request appears.
//!
//! Requests are known up front, so the whole schedule is loaded once at build
//! time and each tick drains only its own bucket.

use std::collections::BTreeMap;

use ld_core::{Passenger, PassengerIdx, Tick};

/// Ticks → passengers whose request arrives at that tick, in request order.
#[derive(Debug, Default)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<PassengerIdx>>,
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule every passenger in `passengers` (indexed by `PassengerIdx`)
    /// at its arrival tick.
    pub fn build_from(passengers: &[Passenger]) -> Self {
        let mut queue = Self::new();
        for (i, p) in passengers.iter().enumerate() {
            queue.push(p.arrival, PassengerIdx(i as u32));
        }
        queue
    }

    pub fn push(&mut self, tick: Tick, passenger: PassengerIdx) {
        self.inner.entry(tick).or_default().push(passenger);
        self.total += 1;
    }

    /// Remove and return the passengers arriving at exactly `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<PassengerIdx>> {
        let arrived = self.inner.remove(&tick)?;
        self.total -= arrived.len();
        Some(arrived)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
