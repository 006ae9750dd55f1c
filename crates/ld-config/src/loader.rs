//! Scenario file loading.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "zone_map": { "1": [1, 2, 3, 4, 5], "2": [6, 7, 8, 9, 10] },
//!   "passenger_requests": [
//!     [0, "p1", 1, 9],
//!     { "tick": 3, "id": "p2", "source": 7, "dest": 2 }
//!   ],
//!   "max_time": 1000,
//!   "max_capacity": 4
//! }
//! ```
//!
//! `default_zone_mapping` is accepted as an alias for `zone_map`.  Requests
//! may be `[tick, id, source, dest]` arrays or objects, mixed freely.
//!
//! # CSV requests
//!
//! ```csv
//! tick,passenger_id,source,destination
//! 0,p1,1,9
//! 3,p2,7,2
//! ```
//!
//! Numbers are read as `i64` so that out-of-range values reach
//! [`validate`][crate::validate] and get a field-specific error instead of a
//! generic parse failure.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, ConfigResult};

// ── Raw (unvalidated) shapes ──────────────────────────────────────────────────

/// A scenario exactly as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    /// Elevator id → floors it initially serves.
    #[serde(alias = "default_zone_mapping")]
    pub zone_map: BTreeMap<u32, Vec<i64>>,

    pub passenger_requests: Vec<RawRequest>,

    pub max_time: u64,

    pub max_capacity: u64,
}

/// One passenger request before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawRequest {
    Tuple(i64, String, i64, i64),
    Object {
        tick:   i64,
        id:     String,
        source: i64,
        dest:   i64,
    },
}

impl RawRequest {
    /// `(tick, id, source, dest)` regardless of the written form.
    pub fn parts(&self) -> (i64, &str, i64, i64) {
        match self {
            RawRequest::Tuple(tick, id, source, dest) => (*tick, id, *source, *dest),
            RawRequest::Object { tick, id, source, dest } => (*tick, id, *source, *dest),
        }
    }
}

#[derive(Deserialize)]
struct RequestRecord {
    tick:         i64,
    passenger_id: String,
    source:       i64,
    destination:  i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a scenario from a JSON file.
pub fn load_json(path: &Path) -> ConfigResult<RawConfig> {
    let file = std::fs::File::open(path)?;
    load_json_reader(std::io::BufReader::new(file))
}

/// Like [`load_json`] but accepts any `Read` source.
pub fn load_json_reader<R: Read>(reader: R) -> ConfigResult<RawConfig> {
    let raw: RawConfig = serde_json::from_reader(reader)?;
    log::debug!(
        "loaded scenario: {} elevators, {} requests",
        raw.zone_map.len(), raw.passenger_requests.len()
    );
    Ok(raw)
}

pub fn load_json_str(json: &str) -> ConfigResult<RawConfig> {
    load_json_reader(json.as_bytes())
}

/// Read passenger requests from a CSV file, in file order.
pub fn load_requests_csv(path: &Path) -> ConfigResult<Vec<RawRequest>> {
    let file = std::fs::File::open(path)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
pub fn load_requests_reader<R: Read>(reader: R) -> ConfigResult<Vec<RawRequest>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut requests = Vec::new();
    for result in csv_reader.deserialize::<RequestRecord>() {
        let row = result.map_err(|e| ConfigError::Csv(e.to_string()))?;
        requests.push(RawRequest::Object {
            tick:   row.tick,
            id:     row.passenger_id,
            source: row.source,
            dest:   row.destination,
        });
    }
    log::debug!("loaded {} requests from CSV", requests.len());
    Ok(requests)
}
