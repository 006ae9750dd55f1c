use std::fmt;

/// Operating state of one elevator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ElevatorState {
    /// No work.  Drifts back toward the home floor one floor per tick.
    #[default]
    Idle,
    /// Travelling to the next pickup floor.
    MovingToPickup,
    /// Stopped at a pickup floor for one tick while passengers board.
    Loading,
    /// Carrying passengers toward their destinations.
    DroppingOff,
}

impl ElevatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Idle           => "idle",
            ElevatorState::MovingToPickup => "moving_to_pickup",
            ElevatorState::Loading        => "loading",
            ElevatorState::DroppingOff    => "dropping_off",
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
