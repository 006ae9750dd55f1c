//! Floors and travel direction.

use std::fmt;

/// A floor number.  Signed so basements can be modelled, although validated
/// passenger sources are never negative.
pub type Floor = i32;

/// Committed travel direction of an elevator.
///
/// An elevator without a committed direction holds `Option::<Direction>::None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction an elevator at `from` commits to when its next target is
    /// `to`.  Equal floors count as `Up`.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        if to >= from { Direction::Up } else { Direction::Down }
    }

    /// `Up` when `from` is strictly below every floor in `targets` (including
    /// the vacuous case of no targets), `Down` otherwise.
    pub fn toward_all<I>(from: Floor, targets: I) -> Direction
    where
        I: IntoIterator<Item = Floor>,
    {
        if targets.into_iter().all(|t| from < t) {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move `current` one floor toward `target`.  Returns `true` if the floor
/// changed, `false` if already there.
#[inline]
pub fn step_toward(current: &mut Floor, target: Floor) -> bool {
    match (*current).cmp(&target) {
        std::cmp::Ordering::Less    => { *current += 1; true }
        std::cmp::Ordering::Greater => { *current -= 1; true }
        std::cmp::Ordering::Equal   => false,
    }
}
