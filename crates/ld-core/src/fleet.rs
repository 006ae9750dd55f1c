//! Static description of one elevator in the configured fleet.

use crate::{ElevatorId, Floor};

/// An elevator as configured: its id and the floor range it initially
/// serves.  It starts idle at `zone_start`, which is also its home floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElevatorSpec {
    pub id:         ElevatorId,
    pub zone_start: Floor,
    pub zone_end:   Floor,
}

impl ElevatorSpec {
    pub fn new(id: u32, zone_start: Floor, zone_end: Floor) -> Self {
        Self { id: ElevatorId(id), zone_start, zone_end }
    }

    #[inline]
    pub fn home_floor(&self) -> Floor {
        self.zone_start
    }
}
