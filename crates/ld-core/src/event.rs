//! Simulation events and the sink they are delivered to.
//!
//! The simulation never writes text logs to reconstruct trips from.  Instead
//! every state change that matters for reporting is emitted as a [`SimEvent`]
//! into an injected [`EventSink`], in the exact order it happened.  The
//! trace is append-only and, for a given configuration, identical across runs.

use std::fmt;

use crate::{ElevatorId, Floor, PassengerId, Tick};

/// Which edge of an elevator's zone moved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ZoneBound {
    Start,
    End,
}

impl ZoneBound {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneBound::Start => "start",
            ZoneBound::End   => "end",
        }
    }
}

/// One entry of the event trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// The dispatcher matched a waiting passenger to an elevator.
    Assigned { tick: Tick, passenger: PassengerId, elevator: ElevatorId },

    /// A passenger stepped into a loading elevator.
    Boarded { tick: Tick, passenger: PassengerId, elevator: ElevatorId },

    /// A passenger left the elevator at their destination.
    Exited { tick: Tick, passenger: PassengerId, elevator: ElevatorId, floor: Floor },

    /// An elevator widened its zone to cover an assigned pickup.
    ZoneExpanded { tick: Tick, elevator: ElevatorId, bound: ZoneBound, from: Floor, to: Floor },

    /// An idle elevator with assigned waiters switched into pickup mode.
    PickupModeEngaged { tick: Tick, elevator: ElevatorId, floor: Floor },

    /// An elevator reached a pickup floor and started loading.
    ArrivedAtPickup { tick: Tick, elevator: ElevatorId, floor: Floor },

    /// An elevator reached a destination floor.
    DroppedOff { tick: Tick, elevator: ElevatorId, floor: Floor },

    /// No elevator was eligible for this passenger.  Emitted at most once
    /// per passenger.
    NoElevatorAvailable { tick: Tick, passenger: PassengerId },
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match self {
            SimEvent::Assigned { tick, .. }
            | SimEvent::Boarded { tick, .. }
            | SimEvent::Exited { tick, .. }
            | SimEvent::ZoneExpanded { tick, .. }
            | SimEvent::PickupModeEngaged { tick, .. }
            | SimEvent::ArrivedAtPickup { tick, .. }
            | SimEvent::DroppedOff { tick, .. }
            | SimEvent::NoElevatorAvailable { tick, .. } => *tick,
        }
    }

    /// Stable snake_case name used as the `event` column of trace files.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::Assigned { .. }            => "assigned",
            SimEvent::Boarded { .. }             => "boarded",
            SimEvent::Exited { .. }              => "exited",
            SimEvent::ZoneExpanded { .. }        => "zone_expanded",
            SimEvent::PickupModeEngaged { .. }   => "pickup_mode",
            SimEvent::ArrivedAtPickup { .. }     => "arrived_at_pickup",
            SimEvent::DroppedOff { .. }          => "dropped_off",
            SimEvent::NoElevatorAvailable { .. } => "no_elevator",
        }
    }

    pub fn passenger(&self) -> Option<&PassengerId> {
        match self {
            SimEvent::Assigned { passenger, .. }
            | SimEvent::Boarded { passenger, .. }
            | SimEvent::Exited { passenger, .. }
            | SimEvent::NoElevatorAvailable { passenger, .. } => Some(passenger),
            _ => None,
        }
    }

    pub fn elevator(&self) -> Option<ElevatorId> {
        match self {
            SimEvent::Assigned { elevator, .. }
            | SimEvent::Boarded { elevator, .. }
            | SimEvent::Exited { elevator, .. }
            | SimEvent::ZoneExpanded { elevator, .. }
            | SimEvent::PickupModeEngaged { elevator, .. }
            | SimEvent::ArrivedAtPickup { elevator, .. }
            | SimEvent::DroppedOff { elevator, .. } => Some(*elevator),
            SimEvent::NoElevatorAvailable { .. } => None,
        }
    }

    /// The floor the event happened at, if it has one.  For `ZoneExpanded`
    /// this is the new bound.
    pub fn floor(&self) -> Option<Floor> {
        match self {
            SimEvent::Exited { floor, .. }
            | SimEvent::PickupModeEngaged { floor, .. }
            | SimEvent::ArrivedAtPickup { floor, .. }
            | SimEvent::DroppedOff { floor, .. } => Some(*floor),
            SimEvent::ZoneExpanded { to, .. } => Some(*to),
            _ => None,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Assigned { tick, passenger, elevator } => {
                write!(f, "Time {tick}: Passenger {passenger} assigned to Elevator {elevator}")
            }
            SimEvent::Boarded { tick, passenger, elevator } => {
                write!(f, "Time {tick}: Passenger {passenger} boarded Elevator {elevator}")
            }
            SimEvent::Exited { tick, passenger, floor, .. } => {
                write!(f, "Time {tick}: Passenger {passenger} exited at floor {floor}")
            }
            SimEvent::ZoneExpanded { tick, elevator, bound, from, to } => write!(
                f,
                "Time {tick}: Elevator {elevator} expanding zone {} from {from} to {to}",
                bound.as_str()
            ),
            SimEvent::PickupModeEngaged { tick, elevator, floor } => write!(
                f,
                "Time {tick}: Elevator {elevator} switching to pickup mode with next pickup floor {floor}"
            ),
            SimEvent::ArrivedAtPickup { tick, elevator, floor } => {
                write!(f, "Time {tick}: Elevator {elevator} arrived at pickup floor {floor}")
            }
            SimEvent::DroppedOff { tick, elevator, floor } => {
                write!(f, "Time {tick}: Elevator {elevator} dropped off passengers at floor {floor}")
            }
            SimEvent::NoElevatorAvailable { tick, passenger } => {
                write!(f, "Time {tick}: No available elevator for Passenger {passenger}")
            }
        }
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Receiver for the event trace.
///
/// Implementations must not reorder events.  `emit` has no return value:
/// sinks that can fail (file writers) store the error and expose it after
/// the run.
pub trait EventSink {
    fn emit(&mut self, event: SimEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: SimEvent) {
        (**self).emit(event);
    }
}

/// An [`EventSink`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: SimEvent) {}
}

/// An [`EventSink`] that keeps the whole trace in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimEvent> {
        self.events.iter()
    }

    /// Events of one kind, in trace order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SimEvent> + 'a {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    /// Events that mention `passenger`, in trace order.
    pub fn for_passenger<'a>(&'a self, passenger: &'a str) -> impl Iterator<Item = &'a SimEvent> + 'a {
        self.events
            .iter()
            .filter(move |e| e.passenger().is_some_and(|p| p.as_str() == passenger))
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}
