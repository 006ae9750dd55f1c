//! `ld-dispatch` — matches waiting passengers to elevators.
//!
//! # Assignment rule
//!
//! ```text
//! zones = create_zones(min zone_start, max zone_end, fleet.len())
//! for elevator in fleet (in order):
//!   skip if onboard + pending(elevator) >= capacity
//!   Idle            → cost = |floor - source|
//!   MovingToPickup  → eligible only if
//!                       zone(farthest destination) == zone(passenger dest)
//!                   and zone(farthest pickup)      == zone(passenger source)
//!                       (pickup check only while pickups remain)
//!                     cost = |floor - source|
//!   anything else   → skip
//! lowest cost wins; ties keep the earlier elevator
//! ```
//!
//! "Farthest" means farthest in the elevator's committed direction.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Use FxHash for the pending-load tally.                   |

pub mod dispatcher;
pub mod load;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatcher, fleet_partition};
pub use load::PendingLoads;
