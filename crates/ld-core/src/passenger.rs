//! Passenger requests and per-run passenger state.

use std::fmt;

use crate::{ElevatorId, Floor, PassengerId, Tick};

/// One configured trip: who, when, from where, to where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassengerRequest {
    pub tick:   Tick,
    pub id:     PassengerId,
    pub source: Floor,
    pub dest:   Floor,
}

impl PassengerRequest {
    pub fn new(tick: u64, id: impl Into<PassengerId>, source: Floor, dest: Floor) -> Self {
        Self { tick: Tick(tick), id: id.into(), source, dest }
    }
}

/// A passenger and the progress of their trip.
///
/// Lifecycle: unassigned → assigned → boarded → exited.  Passengers are never
/// removed from the simulation's table, so every field stays available for
/// reporting after the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub id:      PassengerId,
    pub arrival: Tick,
    pub source:  Floor,
    pub dest:    Floor,

    /// Tick at which the dispatcher matched this passenger to an elevator.
    pub assigned_at:       Option<Tick>,
    pub assigned_elevator: Option<ElevatorId>,
    pub board_time:        Option<Tick>,
    pub exit_time:         Option<Tick>,

    /// Set once the "no elevator available" diagnostic has been reported, so
    /// a passenger that waits for many ticks is reported only once.
    pub unassignable_reported: bool,
}

impl Passenger {
    pub fn from_request(req: &PassengerRequest) -> Self {
        Self {
            id:                    req.id.clone(),
            arrival:               req.tick,
            source:                req.source,
            dest:                  req.dest,
            assigned_at:           None,
            assigned_elevator:     None,
            board_time:            None,
            exit_time:             None,
            unassignable_reported: false,
        }
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_elevator.is_some()
    }

    #[inline]
    pub fn is_assigned_to(&self, elevator: ElevatorId) -> bool {
        self.assigned_elevator == Some(elevator)
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Record a successful dispatch.
    pub fn assign(&mut self, elevator: ElevatorId, now: Tick) {
        self.assigned_elevator = Some(elevator);
        self.assigned_at = Some(now);
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passenger {} ({}->{})", self.id, self.source, self.dest)
    }
}
