//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use ld_core::{
    ElevatorId, Floor, Passenger, PassengerIdx, SimConfig, SimEvent, Tick,
};
use ld_dispatch::{Dispatcher, PendingLoads};
use ld_elevator::{Elevator, ElevatorState, ZoneExpansion};

use crate::{ArrivalQueue, SimObserver};

/// How a call to [`Sim::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Last tick processed, `None` if the budget was zero.
    pub last_tick: Option<Tick>,
    /// Ticks processed by this call.
    pub ticks_run: u64,
    /// Every passenger has an exit tick.
    pub all_exited: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Holds all state and drives the per-tick phases in a fixed order:
///
/// 1. **Arrivals**: requests due this tick join the waiting queue.
/// 2. **Dispatch**: each unassigned waiter is offered to the [`Dispatcher`].
/// 3. **Zones**: every elevator widens its zone to reach its own waiters.
/// 4. **Promotion**: idle elevators with assigned waiters head for the
///    nearest one.
/// 5. **Boarding**: loading elevators take their waiters at the current floor.
/// 6. **Motion**: every elevator steps once.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Next tick to process.
    pub clock: Tick,

    /// Every passenger in request order, indexed by `PassengerIdx`.
    pub passengers: Vec<Passenger>,

    /// The fleet in ascending id order.
    pub fleet: Vec<Elevator>,

    /// Arrived passengers not yet aboard, in arrival order.
    pub waiting: VecDeque<PassengerIdx>,

    /// Requests that have not arrived yet.
    pub arrivals: ArrivalQueue,

    pub dispatcher: Dispatcher,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger has exited or the tick budget is spent.
    pub fn run<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> RunOutcome {
        log::info!(
            "simulating {} passengers on {} elevators for up to {} ticks",
            self.passengers.len(), self.fleet.len(), self.config.max_ticks
        );
        let mut last_tick = None;
        let mut ticks_run = 0;
        while self.clock < self.config.end_tick() {
            last_tick = Some(self.step_tick(observer));
            ticks_run += 1;
            if self.all_exited() {
                break;
            }
        }
        let outcome = RunOutcome { last_tick, ticks_run, all_exited: self.all_exited() };
        observer.on_sim_end(&outcome);
        outcome
    }

    /// Process exactly `n` ticks from the current position, ignoring both
    /// the tick budget and early termination.
    pub fn run_ticks<O: SimObserver + ?Sized>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_tick(observer);
        }
    }

    /// Process the tick at `self.clock`, advance the clock, and return the
    /// tick just processed.
    pub fn step_tick<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> Tick {
        let now = self.clock;
        observer.on_tick_start(now, &self.fleet);
        self.process_tick(now, observer);
        observer.on_tick_end(now, &self.fleet);
        self.clock = now + 1;
        now
    }

    /// `true` once every passenger has an exit tick.  Vacuously true with no
    /// passengers.
    pub fn all_exited(&self) -> bool {
        self.passengers.iter().all(Passenger::has_exited)
    }

    pub fn passenger(&self, id: &str) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id.as_str() == id)
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.fleet.iter().find(|e| e.id == id)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn process_tick<O: SimObserver + ?Sized>(&mut self, now: Tick, observer: &mut O) {
        if let Some(arrived) = self.arrivals.drain_tick(now) {
            self.waiting.extend(arrived);
        }
        self.dispatch_waiting(now, observer);
        self.adjust_zones(now, observer);
        self.engage_idle(now, observer);
        self.board_loading(now, observer);
        for elevator in &mut self.fleet {
            elevator.step(now, &mut self.passengers, observer);
        }
    }

    /// Offer every unassigned waiter to the dispatcher, in queue order.
    ///
    /// Pending loads are re-tallied for each passenger so a seat promised
    /// earlier in the same tick counts against capacity.
    fn dispatch_waiting<O: SimObserver + ?Sized>(&mut self, now: Tick, observer: &mut O) {
        let unassigned: Vec<PassengerIdx> = self
            .waiting
            .iter()
            .copied()
            .filter(|idx| !self.passengers[idx.index()].is_assigned())
            .collect();

        for idx in unassigned {
            let pending = PendingLoads::tally(self.waiting.iter().map(|i| &self.passengers[i.index()]));
            let passenger = &mut self.passengers[idx.index()];
            let Some(elevator_id) = self.dispatcher.assign(passenger, &pending, &self.fleet, now, observer)
            else {
                continue;
            };
            passenger.assign(elevator_id, now);
            observer.emit(SimEvent::Assigned {
                tick:      now,
                passenger: passenger.id.clone(),
                elevator:  elevator_id,
            });

            let (source, dest) = (passenger.source, passenger.dest);
            if let Some(elevator) = self.fleet.iter_mut().find(|e| e.id == elevator_id) {
                elevator.update_route(source, dest);
                if elevator.is_idle() {
                    elevator.state = ElevatorState::MovingToPickup;
                }
            }
        }
    }

    fn adjust_zones<O: SimObserver + ?Sized>(&mut self, now: Tick, observer: &mut O) {
        let passengers = &self.passengers;
        let waiting: Vec<&Passenger> = self.waiting.iter().map(|i| &passengers[i.index()]).collect();
        let fleet = &mut self.fleet;

        #[cfg(feature = "parallel")]
        let expansions: Vec<Vec<ZoneExpansion>> = {
            use rayon::prelude::*;
            fleet
                .par_iter_mut()
                .map(|e| e.adjust_zone(waiting.iter().copied()))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let expansions: Vec<Vec<ZoneExpansion>> = fleet
            .iter_mut()
            .map(|e| e.adjust_zone(waiting.iter().copied()))
            .collect();

        for (elevator, made) in fleet.iter().zip(expansions) {
            for x in made {
                observer.emit(SimEvent::ZoneExpanded {
                    tick:     now,
                    elevator: elevator.id,
                    bound:    x.bound,
                    from:     x.from,
                    to:       x.to,
                });
            }
        }
    }

    /// Send every idle elevator with assigned waiters toward the nearest one.
    fn engage_idle<O: SimObserver + ?Sized>(&mut self, now: Tick, observer: &mut O) {
        for elevator in self.fleet.iter_mut().filter(|e| e.is_idle()) {
            let here = elevator.current_floor;
            let mut nearest: Option<Floor> = None;
            for idx in &self.waiting {
                let p = &self.passengers[idx.index()];
                if !p.is_assigned_to(elevator.id) {
                    continue;
                }
                if nearest.is_none_or(|n| here.abs_diff(p.source) < here.abs_diff(n)) {
                    nearest = Some(p.source);
                }
            }
            let Some(floor) = nearest else { continue };
            elevator.engage_pickup(floor);
            observer.emit(SimEvent::PickupModeEngaged { tick: now, elevator: elevator.id, floor });
        }
    }

    /// Board waiters at each loading elevator's floor, up to free capacity.
    fn board_loading<O: SimObserver + ?Sized>(&mut self, now: Tick, observer: &mut O) {
        for elevator in self.fleet.iter_mut() {
            if elevator.state != ElevatorState::Loading {
                continue;
            }
            let (id, floor) = (elevator.id, elevator.current_floor);
            let boarding: Vec<PassengerIdx> = self
                .waiting
                .iter()
                .copied()
                .filter(|idx| {
                    let p = &self.passengers[idx.index()];
                    p.source == floor && p.is_assigned_to(id)
                })
                .take(elevator.free_capacity())
                .collect();

            if !boarding.is_empty() {
                self.waiting.retain(|idx| !boarding.contains(idx));
            }
            for idx in boarding {
                let p = &mut self.passengers[idx.index()];
                p.board_time = Some(now);
                elevator.board(idx, p.dest);
                observer.emit(SimEvent::Boarded { tick: now, passenger: p.id.clone(), elevator: id });
            }
            elevator.resume_after_boarding();
        }
    }
}
