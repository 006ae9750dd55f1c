//! Direction-sorted floor sets used for pickups and destinations.

use ld_core::{Direction, Floor};

/// A set of floors kept in travel order.
///
/// Each floor appears at most once.  After every insertion the queue is
/// re-sorted: ascending when the owning elevator is heading up, descending
/// otherwise (including when it has no direction yet).  Removal keeps the
/// existing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteQueue {
    floors: Vec<Floor>,
}

impl RouteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `floor` if absent and re-sort for `direction`.
    ///
    /// Returns `true` if the floor was added.
    pub fn insert(&mut self, floor: Floor, direction: Option<Direction>) -> bool {
        if self.floors.contains(&floor) {
            return false;
        }
        self.floors.push(floor);
        match direction {
            Some(Direction::Up) => self.floors.sort_unstable(),
            _                   => self.floors.sort_unstable_by(|a, b| b.cmp(a)),
        }
        true
    }

    /// Remove `floor`.  Returns `true` if it was present.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.floors.iter().position(|&f| f == floor) {
            Some(i) => {
                self.floors.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn min(&self) -> Option<Floor> {
        self.floors.iter().copied().min()
    }

    pub fn max(&self) -> Option<Floor> {
        self.floors.iter().copied().max()
    }

    /// Farthest floor in the direction of travel: the highest when heading
    /// up, the lowest when heading down.
    pub fn farthest(&self, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up   => self.max(),
            Direction::Down => self.min(),
        }
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }
}
