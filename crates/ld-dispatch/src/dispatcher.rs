//! The assignment policy.

use ld_core::{
    Direction, ElevatorId, EventSink, Floor, Passenger, SimEvent, Tick, ZonePartition,
    create_zones,
};
use ld_elevator::{Elevator, ElevatorState};

use crate::PendingLoads;

/// Zone partition over the fleet's current extents, one zone per elevator.
///
/// Zones widen at runtime, so this is recomputed on every assignment.
pub fn fleet_partition(fleet: &[Elevator]) -> ZonePartition {
    let low  = fleet.iter().map(|e| e.zone_start.min(e.zone_end)).min();
    let high = fleet.iter().map(|e| e.zone_start.max(e.zone_end)).max();
    match (low, high) {
        (Some(low), Some(high)) => create_zones(low, high, fleet.len()),
        _                       => ZonePartition::default(),
    }
}

/// Stateless assignment policy.
///
/// Holds no reference to the fleet; the caller passes the current fleet on
/// every call so the simulation keeps sole ownership of the elevators.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Pick an elevator for `passenger`, or `None` if none is eligible.
    ///
    /// The first failure for a passenger is logged and emitted as
    /// `NoElevatorAvailable`; later failures for the same passenger are
    /// silent.  Callers retry every tick.
    pub fn assign<S: EventSink + ?Sized>(
        &self,
        passenger: &mut Passenger,
        pending:   &PendingLoads,
        fleet:     &[Elevator],
        now:       Tick,
        sink:      &mut S,
    ) -> Option<ElevatorId> {
        let best = self.best_elevator(passenger, pending, fleet);
        if best.is_none() && !passenger.unassignable_reported {
            passenger.unassignable_reported = true;
            log::debug!("No available elevator for Passenger {}", passenger.id);
            sink.emit(SimEvent::NoElevatorAvailable { tick: now, passenger: passenger.id.clone() });
        }
        best
    }

    /// Lowest-cost eligible elevator, without side effects.
    pub fn best_elevator(
        &self,
        passenger: &Passenger,
        pending:   &PendingLoads,
        fleet:     &[Elevator],
    ) -> Option<ElevatorId> {
        let zones = fleet_partition(fleet);
        let mut best: Option<(ElevatorId, u32)> = None;
        for elevator in fleet {
            let Some(cost) = self.cost(elevator, passenger, pending, &zones) else {
                continue;
            };
            if best.is_none_or(|(_, min)| cost < min) {
                best = Some((elevator.id, cost));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Cost of serving `passenger` with `elevator`, or `None` if the
    /// elevator is full or not eligible.
    pub fn cost(
        &self,
        elevator:  &Elevator,
        passenger: &Passenger,
        pending:   &PendingLoads,
        zones:     &ZonePartition,
    ) -> Option<u32> {
        if elevator.onboard.len() + pending.get(elevator.id) >= elevator.capacity {
            return None;
        }
        let distance = elevator.current_floor.abs_diff(passenger.source);
        match elevator.state {
            ElevatorState::Idle => Some(distance),
            ElevatorState::MovingToPickup => {
                let direction = elevator.direction?;
                compatible(elevator, direction, passenger, zones).then_some(distance)
            }
            ElevatorState::Loading | ElevatorState::DroppingOff => None,
        }
    }
}

/// Zone compatibility of a moving elevator's committed route with a new trip.
fn compatible(
    elevator:  &Elevator,
    direction: Direction,
    passenger: &Passenger,
    zones:     &ZonePartition,
) -> bool {
    let zone = |floor: Floor| zones.zone_of(floor);

    let Some(far_dest) = elevator.destinations.farthest(direction) else {
        return false;
    };
    if zone(far_dest) != zone(passenger.dest) {
        return false;
    }
    match elevator.pickups.farthest(direction) {
        Some(far_pickup) => zone(far_pickup) == zone(passenger.source),
        None             => true,
    }
}
