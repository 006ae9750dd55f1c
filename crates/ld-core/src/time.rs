//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time an
//! elevator needs to travel one floor, and also the length of the loading
//! phase.  There is no mapping to wall-clock time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, or `None` if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-wide simulation settings.
///
/// Produced by `ld-config` after validation and handed to the simulation
/// builder together with the fleet and the passenger requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Tick budget.  The loop processes ticks `0..max_ticks` at most.
    pub max_ticks: u64,

    /// Maximum number of passengers aboard one elevator.  Shared by the
    /// whole fleet; must be positive.
    pub capacity: usize,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}
