//! `ld-sim` — tick loop orchestrator for the `lift_dispatch` simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks:
//!   ① Arrivals   — requests due this tick join the waiting queue.
//!   ② Dispatch   — each unassigned waiter (queue order) is offered to the
//!                  Dispatcher; success → Assigned, update_route.
//!   ③ Zones      — every elevator widens its zone to its own waiters
//!                  (parallel with the `parallel` feature).
//!   ④ Promotion  — idle elevators with assigned waiters head for the
//!                  nearest waiter's floor.
//!   ⑤ Boarding   — loading elevators take their waiters at this floor,
//!                  up to free capacity; then resume_after_boarding.
//!   ⑥ Motion     — Elevator::step for every elevator, in id order.
//!   ⑦ Stop early once every passenger has exited.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the zone phase on Rayon's thread pool.            |
//! | `fx-hash`  | FxHash for the dispatcher's pending-load tally.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ld_core::{ElevatorSpec, EventLog, PassengerRequest, SimConfig};
//! use ld_sim::SimBuilder;
//!
//! let config = SimConfig { max_ticks: 100, capacity: 4 };
//! let fleet = vec![ElevatorSpec::new(1, 1, 10)];
//! let requests = vec![PassengerRequest::new(0, "p1", 5, 10)];
//! let mut sim = SimBuilder::new(config, fleet, requests).build()?;
//! let mut log = EventLog::new();
//! let outcome = sim.run(&mut log);
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use arrivals::ArrivalQueue;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, SimObserver};
pub use sim::{RunOutcome, Sim};
