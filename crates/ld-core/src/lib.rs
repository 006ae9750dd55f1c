//! `ld-core` — foundational types for the `lift_dispatch` simulator.
//!
//! Every other `ld-*` crate depends on this one.  It has no `ld-*`
//! dependencies and no external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `PassengerIdx`, `PassengerId`           |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`fleet`]       | `ElevatorSpec`                                        |
//! | [`floor`]       | `Floor`, `Direction`, `step_toward`                   |
//! | [`passenger`]   | `PassengerRequest`, `Passenger`                       |
//! | [`zones`]       | `ZonePartition`, `create_zones`, `find_zone`          |
//! | [`event`]       | `SimEvent`, `EventSink`, `EventLog`, `NoopSink`       |

pub mod event;
pub mod fleet;
pub mod floor;
pub mod ids;
pub mod passenger;
pub mod time;
pub mod zones;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::{EventLog, EventSink, NoopSink, SimEvent, ZoneBound};
pub use fleet::ElevatorSpec;
pub use floor::{Direction, Floor, step_toward};
pub use ids::{ElevatorId, PassengerId, PassengerIdx};
pub use passenger::{Passenger, PassengerRequest};
pub use time::{SimConfig, Tick};
pub use zones::{ZoneLabel, ZonePartition, create_zones, find_zone};
