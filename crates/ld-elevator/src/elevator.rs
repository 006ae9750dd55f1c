//! The `Elevator` struct: position, zone, route, and the per-tick step.

use std::fmt;

use ld_core::{
    Direction, ElevatorId, EventSink, Floor, Passenger, PassengerIdx, SimEvent, Tick,
    ZoneBound, step_toward,
};

use crate::{ElevatorState, RouteQueue};

/// One zone widening performed by [`Elevator::adjust_zone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneExpansion {
    pub bound: ZoneBound,
    pub from:  Floor,
    pub to:    Floor,
}

/// A single elevator car.
///
/// The simulation loop owns the fleet as a `Vec<Elevator>` and is the only
/// caller of the mutating methods.  None of them fail: they assume the
/// invariants the loop maintains (for example, `pickups` is non-empty while
/// the state is `MovingToPickup`).
#[derive(Clone, Debug)]
pub struct Elevator {
    pub id: ElevatorId,

    pub current_floor: Floor,
    /// Floor the elevator drifts back to while idle.
    pub home_floor: Floor,

    /// Lower edge of the service zone.  Only ever decreases.
    pub zone_start: Floor,
    /// Upper edge of the service zone.  Only ever increases.
    pub zone_end: Floor,

    pub capacity: usize,

    /// Floors where assigned passengers are waiting to board.
    pub pickups: RouteQueue,
    /// Floors where passengers will leave the car.
    pub destinations: RouteQueue,

    pub direction: Option<Direction>,
    pub state:     ElevatorState,

    /// Passengers currently aboard, in boarding order.
    pub onboard: Vec<PassengerIdx>,
}

impl Elevator {
    /// An idle elevator parked at `zone_start`, serving `[zone_start, zone_end]`.
    pub fn new(id: ElevatorId, zone_start: Floor, zone_end: Floor, capacity: usize) -> Self {
        Self {
            id,
            current_floor: zone_start,
            home_floor:    zone_start,
            zone_start,
            zone_end,
            capacity,
            pickups:       RouteQueue::new(),
            destinations:  RouteQueue::new(),
            direction:     None,
            state:         ElevatorState::Idle,
            onboard:       Vec::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` while there is room for one more passenger.
    #[inline]
    pub fn can_accept(&self) -> bool {
        self.onboard.len() < self.capacity
    }

    /// Free seats right now.
    #[inline]
    pub fn free_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.onboard.len())
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == ElevatorState::Idle
    }

    // ── Route management ──────────────────────────────────────────────────

    /// Add a newly assigned passenger's trip to the route.
    ///
    /// An idle elevator first commits to the direction of `source`.  The
    /// pickup is accepted whichever side of the car it lies on; the
    /// dispatcher's zone checks are what keep routes coherent.
    pub fn update_route(&mut self, source: Floor, dest: Floor) {
        if self.is_idle() {
            self.direction = Some(Direction::toward(self.current_floor, source));
        }
        self.pickups.insert(source, self.direction);
        self.destinations.insert(dest, self.direction);

        if !self.pickups.is_empty() {
            self.state = ElevatorState::MovingToPickup;
        }
    }

    /// Put an idle elevator into pickup mode heading for `floor`.
    ///
    /// Direction is only inferred when the floor is new to the route and no
    /// direction is committed yet.
    pub fn engage_pickup(&mut self, floor: Floor) {
        if !self.pickups.contains(floor) {
            if self.direction.is_none() {
                self.direction = Some(Direction::toward(self.current_floor, floor));
            }
            self.pickups.insert(floor, self.direction);
        }
        self.state = ElevatorState::MovingToPickup;
    }

    /// Widen the zone to cover the source floor of every waiting passenger
    /// assigned to this elevator.  Returns the expansions made, in order.
    pub fn adjust_zone<'a, I>(&mut self, waiting: I) -> Vec<ZoneExpansion>
    where
        I: IntoIterator<Item = &'a Passenger>,
    {
        let mut expansions = Vec::new();
        for p in waiting {
            if !p.is_assigned_to(self.id) {
                continue;
            }
            if p.source < self.zone_start {
                log::debug!(
                    "Elevator {}: expanding zone start from {} to {}",
                    self.id, self.zone_start, p.source
                );
                expansions.push(ZoneExpansion { bound: ZoneBound::Start, from: self.zone_start, to: p.source });
                self.zone_start = p.source;
            }
            if p.source > self.zone_end {
                log::debug!(
                    "Elevator {}: expanding zone end from {} to {}",
                    self.id, self.zone_end, p.source
                );
                expansions.push(ZoneExpansion { bound: ZoneBound::End, from: self.zone_end, to: p.source });
                self.zone_end = p.source;
            }
        }
        expansions
    }

    /// Take `passenger` aboard.
    ///
    /// Re-adds the passenger's destination if an earlier drop-off at that
    /// floor already removed it, so every rider always has a stop ahead.
    pub fn board(&mut self, passenger: PassengerIdx, dest: Floor) {
        self.onboard.push(passenger);
        self.destinations.insert(dest, self.direction);
    }

    /// Pick the next state once boarding at the current floor is done.
    ///
    /// Remaining pickups take priority over drop-offs.  The direction is
    /// re-derived from whether the car sits below every remaining target.
    pub fn resume_after_boarding(&mut self) {
        if !self.pickups.is_empty() {
            self.state = ElevatorState::MovingToPickup;
            self.direction = Some(Direction::toward_all(self.current_floor, self.pickups.iter()));
        } else if !self.destinations.is_empty() || !self.onboard.is_empty() {
            self.state = ElevatorState::DroppingOff;
            self.direction = Some(Direction::toward_all(self.current_floor, self.destinations.iter()));
        } else {
            self.state = ElevatorState::Idle;
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one tick: move one floor or make one state transition.
    ///
    /// Passengers dropped off have their exit tick stamped in `passengers`
    /// (indexed by `PassengerIdx`) and are reported to `sink`.
    pub fn step<S: EventSink + ?Sized>(
        &mut self,
        now:        Tick,
        passengers: &mut [Passenger],
        sink:       &mut S,
    ) {
        match self.state {
            ElevatorState::Idle => {
                step_toward(&mut self.current_floor, self.home_floor);
            }

            ElevatorState::MovingToPickup => {
                let Some(target) = self.pickup_target() else {
                    self.finish_loading();
                    return;
                };
                if !step_toward(&mut self.current_floor, target) {
                    self.pickups.remove(target);
                    self.state = ElevatorState::Loading;
                    log::trace!("Elevator {}: arrived at pickup floor {target}", self.id);
                    sink.emit(SimEvent::ArrivedAtPickup { tick: now, elevator: self.id, floor: target });
                }
            }

            ElevatorState::Loading => self.finish_loading(),

            ElevatorState::DroppingOff => {
                let target = match self.direction {
                    Some(Direction::Up) => self.destinations.min(),
                    _                   => self.destinations.max(),
                };
                match target {
                    Some(target) => {
                        if !step_toward(&mut self.current_floor, target) {
                            self.drop_off(target, now, passengers, sink);
                        }
                    }
                    None if !self.pickups.is_empty() => {
                        self.state = ElevatorState::MovingToPickup;
                    }
                    None => {
                        self.state = ElevatorState::Idle;
                        self.direction = None;
                    }
                }
            }
        }
    }

    /// Next pickup to head for.
    ///
    /// Heading up: the highest pickup.  Otherwise the lowest pickup, except
    /// when some destination lies below every pickup, in which case the
    /// highest pickup is served first.
    pub fn pickup_target(&self) -> Option<Floor> {
        let lowest  = self.pickups.min()?;
        let highest = self.pickups.max()?;
        match self.direction {
            Some(Direction::Up) => Some(highest),
            _ => match self.destinations.min() {
                Some(d) if d < lowest => Some(highest),
                _                     => Some(lowest),
            },
        }
    }

    fn finish_loading(&mut self) {
        self.state = if !self.destinations.is_empty() {
            ElevatorState::DroppingOff
        } else if !self.pickups.is_empty() {
            ElevatorState::MovingToPickup
        } else {
            ElevatorState::Idle
        };
    }

    fn drop_off<S: EventSink + ?Sized>(
        &mut self,
        floor:      Floor,
        now:        Tick,
        passengers: &mut [Passenger],
        sink:       &mut S,
    ) {
        let elevator = self.id;
        self.destinations.remove(floor);
        self.onboard.retain(|&idx| {
            let p = &mut passengers[idx.index()];
            if p.dest != floor {
                return true;
            }
            p.exit_time = Some(now);
            sink.emit(SimEvent::Exited {
                tick:      now,
                passenger: p.id.clone(),
                elevator,
                floor,
            });
            false
        });
        log::trace!("Elevator {}: dropped off passengers at floor {floor}", self.id);
        sink.emit(SimEvent::DroppedOff { tick: now, elevator: self.id, floor });
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Elevator {} Floor={} ", self.id, self.current_floor)?;
        if self.pickups.is_empty() && self.destinations.is_empty() {
            f.write_str("Route: None")?;
        } else {
            write!(
                f,
                "Pickups: {:?}, Dest: {:?}",
                self.pickups.as_slice(),
                self.destinations.as_slice()
            )?;
        }
        write!(f, " Load={}/{}>", self.onboard.len(), self.capacity)
    }
}
