//! Turning a [`RawConfig`] into a checked [`SimulationConfig`].

use std::collections::HashSet;
use std::ops::RangeInclusive;

use ld_core::{ElevatorSpec, Floor, PassengerRequest, SimConfig};

use crate::{ConfigError, ConfigResult, RawConfig, RawRequest};

/// A scenario that passed validation, ready for `ld_sim::SimBuilder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// One spec per `zone_map` entry, in ascending id order.
    pub fleet: Vec<ElevatorSpec>,
    /// Requests in file order.
    pub requests: Vec<PassengerRequest>,
    /// Lowest to highest configured floor.
    pub universe: RangeInclusive<Floor>,
    pub sim: SimConfig,
}

/// Check every constraint on `raw` and build the typed config.
///
/// Checks run in file order (zone map, then requests, then capacity), and
/// the first violation is returned.
pub fn validate(raw: &RawConfig) -> ConfigResult<SimulationConfig> {
    let (fleet, universe) = validate_zone_map(raw)?;
    let requests = validate_requests(&raw.passenger_requests, &universe)?;

    if raw.max_capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    let capacity = usize::try_from(raw.max_capacity).unwrap_or(usize::MAX);

    Ok(SimulationConfig {
        fleet,
        requests,
        universe,
        sim: SimConfig { max_ticks: raw.max_time, capacity },
    })
}

fn validate_zone_map(raw: &RawConfig) -> ConfigResult<(Vec<ElevatorSpec>, RangeInclusive<Floor>)> {
    if raw.zone_map.is_empty() {
        return Err(ConfigError::EmptyZoneMap);
    }

    let mut fleet = Vec::with_capacity(raw.zone_map.len());
    for (&elevator, floors) in &raw.zone_map {
        let (Some(&first), Some(&last)) = (floors.first(), floors.last()) else {
            return Err(ConfigError::EmptyFloorList { elevator });
        };
        for pair in floors.windows(2) {
            if pair[0].checked_add(1) != Some(pair[1]) {
                return Err(ConfigError::UnorderedFloors { elevator, prev: pair[0], next: pair[1] });
            }
        }
        let field = format!("zone_map[{elevator}]");
        fleet.push(ElevatorSpec::new(
            elevator,
            to_floor(first, &field)?,
            to_floor(last, &field)?,
        ));
    }

    // Each list is a contiguous run, so the union is gap-free iff the runs,
    // taken in order of their lowest floor, never leave a hole.
    let mut runs: Vec<(Floor, Floor)> = fleet.iter().map(|s| (s.zone_start, s.zone_end)).collect();
    runs.sort_unstable();
    let mut missing = Vec::new();
    let (low, mut covered) = runs[0];
    for &(start, end) in &runs[1..] {
        if i64::from(start) > i64::from(covered) + 1 {
            missing.push(i64::from(covered) + 1..=i64::from(start) - 1);
        }
        covered = covered.max(end);
    }
    if !missing.is_empty() {
        return Err(ConfigError::FloorGap { missing });
    }

    Ok((fleet, low..=covered))
}

fn validate_requests(
    raw:      &[RawRequest],
    universe: &RangeInclusive<Floor>,
) -> ConfigResult<Vec<PassengerRequest>> {
    let in_universe = |floor: i64| Floor::try_from(floor).is_ok_and(|f| universe.contains(&f));

    let mut seen = HashSet::with_capacity(raw.len());
    let mut requests = Vec::with_capacity(raw.len());
    for r in raw {
        let (tick, id, source, dest) = r.parts();
        let Ok(tick) = u64::try_from(tick) else {
            return Err(ConfigError::NegativeTick { passenger: id.to_owned(), tick });
        };
        if !seen.insert(id) {
            return Err(ConfigError::DuplicatePassenger(id.to_owned()));
        }
        if source < 0 {
            return Err(ConfigError::NegativeSource { passenger: id.to_owned(), floor: source });
        }
        if !in_universe(source) {
            return Err(ConfigError::SourceOutOfRange { passenger: id.to_owned(), floor: source });
        }
        if !in_universe(dest) {
            return Err(ConfigError::DestinationOutOfRange { passenger: id.to_owned(), floor: dest });
        }
        requests.push(PassengerRequest::new(
            tick,
            id,
            to_floor(source, id)?,
            to_floor(dest, id)?,
        ));
    }
    Ok(requests)
}

fn to_floor(value: i64, field: &str) -> ConfigResult<Floor> {
    Floor::try_from(value).map_err(|_| ConfigError::FloorOverflow { field: field.to_owned(), value })
}
