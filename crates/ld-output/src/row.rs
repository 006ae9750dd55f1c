//! Flat row form of a [`SimEvent`], shared by every trace backend.

use ld_core::{Floor, SimEvent};

/// One trace line.  Columns that do not apply to the event kind are `None`
/// and written as empty cells / SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:         u64,
    pub event:        &'static str,
    pub passenger_id: Option<String>,
    pub elevator_id:  Option<u32>,
    pub floor:        Option<Floor>,
    /// Human-readable rendering of the event.
    pub message:      String,
}

impl From<&SimEvent> for EventRow {
    fn from(event: &SimEvent) -> Self {
        Self {
            tick:         event.tick().0,
            event:        event.kind(),
            passenger_id: event.passenger().map(|p| p.as_str().to_owned()),
            elevator_id:  event.elevator().map(|e| e.0),
            floor:        event.floor(),
            message:      event.to_string(),
        }
    }
}

/// Render an optional value as a CSV cell.
pub(crate) fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
