//! Builder for constructing a [`Sim`].

use std::collections::{HashSet, VecDeque};

use ld_core::{ElevatorSpec, Passenger, PassengerRequest, SimConfig, Tick};
use ld_dispatch::Dispatcher;
use ld_elevator::Elevator;

use crate::{ArrivalQueue, Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick budget and per-elevator capacity
/// - the fleet as [`ElevatorSpec`]s (any order; the sim sorts by id)
/// - the passenger requests, in request order
///
/// # Optional inputs
///
/// | Method            | Default                |
/// |-------------------|------------------------|
/// | `.dispatcher(d)`  | `Dispatcher::new()`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, fleet, requests).build()?;
/// let outcome = sim.run(&mut EventLog::new());
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    fleet:      Vec<ElevatorSpec>,
    requests:   Vec<PassengerRequest>,
    dispatcher: Option<Dispatcher>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, fleet: Vec<ElevatorSpec>, requests: Vec<PassengerRequest>) -> Self {
        Self { config, fleet, requests, dispatcher: None }
    }

    pub fn dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Check the in-memory inputs, lay out the fleet in id order, and
    /// schedule every request on the arrival queue.
    pub fn build(self) -> SimResult<Sim> {
        if self.fleet.is_empty() {
            return Err(SimError::EmptyFleet);
        }
        if self.config.capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }

        // ── Fleet ─────────────────────────────────────────────────────────
        let mut specs = self.fleet;
        specs.sort_by_key(|s| s.id);
        for pair in specs.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(SimError::DuplicateElevator(pair[0].id));
            }
        }
        let mut fleet = Vec::with_capacity(specs.len());
        for spec in &specs {
            if spec.zone_start > spec.zone_end {
                return Err(SimError::InvertedZone {
                    elevator: spec.id,
                    start:    spec.zone_start,
                    end:      spec.zone_end,
                });
            }
            fleet.push(Elevator::new(spec.id, spec.zone_start, spec.zone_end, self.config.capacity));
        }

        // ── Passengers ────────────────────────────────────────────────────
        if u32::try_from(self.requests.len()).is_err() {
            return Err(SimError::TooManyPassengers);
        }
        let mut seen = HashSet::with_capacity(self.requests.len());
        let mut passengers = Vec::with_capacity(self.requests.len());
        for request in &self.requests {
            if !seen.insert(&request.id) {
                return Err(SimError::DuplicatePassenger(request.id.clone()));
            }
            passengers.push(Passenger::from_request(request));
        }
        let arrivals = ArrivalQueue::build_from(&passengers);

        log::debug!(
            "built simulation: {} elevators, {} passengers, capacity {}",
            fleet.len(), passengers.len(), self.config.capacity
        );

        Ok(Sim {
            config:     self.config,
            clock:      Tick::ZERO,
            passengers,
            fleet,
            waiting:    VecDeque::new(),
            arrivals,
            dispatcher: self.dispatcher.unwrap_or_default(),
        })
    }
}
