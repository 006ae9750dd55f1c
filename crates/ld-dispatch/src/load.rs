//! Tally of waiting passengers already promised to each elevator.

use ld_core::{ElevatorId, Passenger};

#[cfg(feature = "fx-hash")]
type LoadMap = rustc_hash::FxHashMap<ElevatorId, usize>;
#[cfg(not(feature = "fx-hash"))]
type LoadMap = std::collections::HashMap<ElevatorId, usize>;

/// Number of *waiting* (not yet boarded) passengers assigned to each elevator.
///
/// Seats promised to waiters count against capacity just like riders, so an
/// elevator cannot be over-assigned while its passengers are still in the
/// lobby.
#[derive(Debug, Default, Clone)]
pub struct PendingLoads {
    counts: LoadMap,
}

impl PendingLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count assigned passengers in `waiting`.
    pub fn tally<'a, I>(waiting: I) -> Self
    where
        I: IntoIterator<Item = &'a Passenger>,
    {
        let mut loads = Self::new();
        for p in waiting {
            if let Some(elevator) = p.assigned_elevator {
                loads.add(elevator);
            }
        }
        loads
    }

    pub fn add(&mut self, elevator: ElevatorId) {
        *self.counts.entry(elevator).or_insert(0) += 1;
    }

    pub fn get(&self, elevator: ElevatorId) -> usize {
        self.counts.get(&elevator).copied().unwrap_or(0)
    }
}
