//! `ld-elevator` — the per-elevator state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `ElevatorState`                                           |
//! | [`route`]     | `RouteQueue` (direction-sorted floor set)                 |
//! | [`elevator`]  | `Elevator`, `ZoneExpansion`                               |
//!
//! # State machine (summary)
//!
//! ```text
//!            update_route / engage_pickup
//!   Idle ─────────────────────────────────▶ MovingToPickup
//!    ▲                                          │ arrive at pickup
//!    │ nothing left                             ▼
//!    └──────────── DroppingOff ◀──────────── Loading
//!                     │  ▲      destinations      (boarding happens
//!                     │  │                         in ld-sim)
//!                     └──┘ next destination
//! ```
//!
//! Every call to [`Elevator::step`] moves at most one floor or performs one
//! state transition.

pub mod elevator;
pub mod route;
pub mod state;


pub use elevator::{Elevator, ZoneExpansion};
pub use route::RouteQueue;
pub use state::ElevatorState;
