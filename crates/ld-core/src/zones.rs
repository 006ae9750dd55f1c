//! Zone partitions over the floor range.
//!
//! A partition splits `[low, high]` into `count` contiguous half-open ranges
//! labelled `zone1 … zoneN`.  Every range except the last has
//! `(high - low + 1) / count` floors (integer division); the last absorbs the
//! remainder.  When `count` exceeds the number of floors the leading ranges
//! are empty and the last one holds every floor.
//!
//! Bounds are kept as `i64` so a partition ending at `Floor::MAX` still has a
//! representable exclusive end.
//!
//! The dispatcher only ever compares labels, so a partition is a coarse
//! compatibility test and never constrains elevator movement.

use std::fmt;
use std::ops::Range;

use crate::Floor;

/// 1-based zone label (`zone1`, `zone2`, …).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ZoneLabel(pub u32);

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone{}", self.0)
    }
}

/// Ordered list of labelled, non-overlapping floor ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZonePartition {
    zones: Vec<(ZoneLabel, Range<i64>)>,
}

impl ZonePartition {
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZoneLabel, &Range<i64>)> {
        self.zones.iter().map(|(label, range)| (*label, range))
    }

    /// Label of the range containing `floor`.
    pub fn zone_of(&self, floor: Floor) -> Option<ZoneLabel> {
        self.zones
            .iter()
            .find(|(_, range)| range.contains(&i64::from(floor)))
            .map(|(label, _)| *label)
    }
}

/// Partition `[low, high]` into `count` contiguous ranges.
///
/// `count == 0` yields an empty partition.
pub fn create_zones(low: Floor, high: Floor, count: usize) -> ZonePartition {
    if count == 0 {
        return ZonePartition::default();
    }
    let (low, high) = (i64::from(low), i64::from(high));
    let total = (high - low + 1).max(0);
    let size = total / count as i64;

    let mut zones = Vec::with_capacity(count);
    let mut start = low;
    for i in 1..=count {
        let end = if i == count { high + 1 } else { start + size };
        zones.push((ZoneLabel(i as u32), start..end));
        start = end;
    }
    ZonePartition { zones }
}

/// Label of the zone containing `value`, or `None` if it lies outside the
/// partition.
#[inline]
pub fn find_zone(value: Floor, partition: &ZonePartition) -> Option<ZoneLabel> {
    partition.zone_of(value)
}
