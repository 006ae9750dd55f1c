use std::ops::RangeInclusive;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request CSV parse error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zone_map: no elevators defined")]
    EmptyZoneMap,

    #[error("zone_map: floor list for elevator {elevator} is empty")]
    EmptyFloorList { elevator: u32 },

    #[error("zone_map: floors for elevator {elevator} must ascend by one, found {prev} then {next}")]
    UnorderedFloors { elevator: u32, prev: i64, next: i64 },

    #[error("zone_map: floors are not continuous, missing {missing:?}")]
    FloorGap { missing: Vec<RangeInclusive<i64>> },

    #[error("{field}: value {value} does not fit a floor number")]
    FloorOverflow { field: String, value: i64 },

    #[error("passenger {passenger}: tick must be non-negative, got {tick}")]
    NegativeTick { passenger: String, tick: i64 },

    #[error("duplicate passenger id: {0}")]
    DuplicatePassenger(String),

    #[error("passenger {passenger}: source floor must be non-negative, got {floor}")]
    NegativeSource { passenger: String, floor: i64 },

    #[error("passenger {passenger}: source floor {floor} is not in the configured floors")]
    SourceOutOfRange { passenger: String, floor: i64 },

    #[error("passenger {passenger}: destination floor {floor} is not in the configured floors")]
    DestinationOutOfRange { passenger: String, floor: i64 },

    #[error("max_capacity must be positive")]
    ZeroCapacity,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
