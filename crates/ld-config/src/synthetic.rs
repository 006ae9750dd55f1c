//! Seeded random traffic for load experiments.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use ld_core::{Floor, PassengerRequest};

/// Generate `count` requests with ticks in `0..horizon` and floors drawn
/// uniformly from `universe`.
///
/// Ids are `s0`, `s1`, … in generation order; the result is sorted by tick
/// (stable, so ids stay ascending within a tick).  Source and destination
/// differ whenever the universe has more than one floor.  The same
/// `(universe, count, horizon, seed)` always yields the same requests.
pub fn generate(
    universe: RangeInclusive<Floor>,
    count:    usize,
    horizon:  u64,
    seed:     u64,
) -> Vec<PassengerRequest> {
    if universe.is_empty() {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let single_floor = universe.start() == universe.end();

    let mut requests: Vec<PassengerRequest> = (0..count)
        .map(|i| {
            let tick = if horizon == 0 { 0 } else { rng.gen_range(0..horizon) };
            let source = rng.gen_range(universe.clone());
            let mut dest = rng.gen_range(universe.clone());
            while dest == source && !single_floor {
                dest = rng.gen_range(universe.clone());
            }
            PassengerRequest::new(tick, format!("s{i}"), source, dest)
        })
        .collect();
    requests.sort_by_key(|r| r.tick);
    requests
}
