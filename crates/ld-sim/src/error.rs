use ld_core::{ElevatorId, Floor, PassengerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet is empty")]
    EmptyFleet,

    #[error("elevator capacity must be positive")]
    ZeroCapacity,

    #[error("elevator {0} appears more than once in the fleet")]
    DuplicateElevator(ElevatorId),

    #[error("elevator {elevator}: zone start {start} is above zone end {end}")]
    InvertedZone {
        elevator: ElevatorId,
        start:    Floor,
        end:      Floor,
    },

    #[error("passenger id {0} is used by more than one request")]
    DuplicatePassenger(PassengerId),

    #[error("more than {max} passengers", max = u32::MAX)]
    TooManyPassengers,
}

pub type SimResult<T> = Result<T, SimError>;
