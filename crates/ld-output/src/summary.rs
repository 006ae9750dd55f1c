//! Per-passenger summary report.
//!
//! Rebuilt from the event trace rather than from simulator state, so a
//! report can be produced from any recorded run.
//!
//! ```text
//! wait  = boarding tick − assignment tick
//! total = exit tick     − assignment tick
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use ld_core::{ElevatorId, Floor, PassengerId, PassengerRequest, SimEvent, Tick};

use crate::OutputResult;
use crate::row::cell;

pub const SUMMARY_FILE: &str = "passenger_summary.csv";

const HEADER: [&str; 10] = [
    "passenger_id",
    "source",
    "destination",
    "assigned_elevator",
    "arrival_time",
    "assigned_time",
    "boarding_time",
    "exited_time",
    "wait_time",
    "total_time",
];

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerSummary {
    pub passenger_id:      PassengerId,
    pub source:            Floor,
    pub destination:       Floor,
    pub assigned_elevator: Option<ElevatorId>,
    pub arrival_time:      Tick,
    pub assigned_time:     Option<Tick>,
    pub boarding_time:     Option<Tick>,
    pub exited_time:       Option<Tick>,
    pub wait_time:         Option<u64>,
    pub total_time:        Option<u64>,
}

impl PassengerSummary {
    /// One row per request, in request order.  Events for unknown
    /// passengers are ignored; if an event kind repeats, the first wins.
    pub fn from_events(requests: &[PassengerRequest], events: &[SimEvent]) -> Vec<PassengerSummary> {
        let mut rows: Vec<PassengerSummary> = requests
            .iter()
            .map(|r| PassengerSummary {
                passenger_id:      r.id.clone(),
                source:            r.source,
                destination:       r.dest,
                assigned_elevator: None,
                arrival_time:      r.tick,
                assigned_time:     None,
                boarding_time:     None,
                exited_time:       None,
                wait_time:         None,
                total_time:        None,
            })
            .collect();
        let index: HashMap<&str, usize> =
            requests.iter().enumerate().map(|(i, r)| (r.id.as_str(), i)).collect();

        for event in events {
            let Some(&i) = event.passenger().and_then(|p| index.get(p.as_str())) else {
                continue;
            };
            let row = &mut rows[i];
            match event {
                SimEvent::Assigned { tick, elevator, .. } if row.assigned_time.is_none() => {
                    row.assigned_time = Some(*tick);
                    row.assigned_elevator = Some(*elevator);
                }
                SimEvent::Boarded { tick, .. } if row.boarding_time.is_none() => {
                    row.boarding_time = Some(*tick);
                }
                SimEvent::Exited { tick, .. } if row.exited_time.is_none() => {
                    row.exited_time = Some(*tick);
                }
                _ => {}
            }
        }

        for row in &mut rows {
            if let Some(assigned) = row.assigned_time {
                row.wait_time = row.boarding_time.and_then(|t| t.since(assigned));
                row.total_time = row.exited_time.and_then(|t| t.since(assigned));
            }
        }
        rows
    }

    fn record(&self) -> [String; 10] {
        [
            self.passenger_id.to_string(),
            self.source.to_string(),
            self.destination.to_string(),
            cell(self.assigned_elevator),
            self.arrival_time.to_string(),
            cell(self.assigned_time),
            cell(self.boarding_time),
            cell(self.exited_time),
            cell(self.wait_time),
            cell(self.total_time),
        ]
    }
}

// ── Aggregates ────────────────────────────────────────────────────────────────

/// Min / max / rounded mean of one metric.  All zero when there are no
/// samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricStats {
    pub min:     u64,
    pub max:     u64,
    pub mean:    u64,
    pub samples: usize,
}

impl MetricStats {
    pub fn from_samples<I: IntoIterator<Item = u64>>(samples: I) -> Self {
        let mut stats = MetricStats::default();
        let mut sum: u128 = 0;
        for v in samples {
            if stats.samples == 0 {
                stats.min = v;
                stats.max = v;
            } else {
                stats.min = stats.min.min(v);
                stats.max = stats.max.max(v);
            }
            sum += u128::from(v);
            stats.samples += 1;
        }
        if stats.samples > 0 {
            stats.mean = (sum as f64 / stats.samples as f64).round() as u64;
        }
        stats
    }
}

/// Aggregates over the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub wait:  MetricStats,
    pub total: MetricStats,
}

pub fn aggregate(rows: &[PassengerSummary]) -> Aggregate {
    Aggregate {
        wait:  MetricStats::from_samples(rows.iter().filter_map(|r| r.wait_time)),
        total: MetricStats::from_samples(rows.iter().filter_map(|r| r.total_time)),
    }
}

// ── CSV report ────────────────────────────────────────────────────────────────

/// Write the report to `path`: header, one row per passenger, a blank row,
/// then one line per aggregate metric.
pub fn write_csv(path: &Path, rows: &[PassengerSummary]) -> OutputResult<()> {
    write_report(File::create(path)?, rows)?;
    log::info!("summary written to {}", path.display());
    Ok(())
}

/// Like [`write_csv`] but accepts any `Write` sink.
pub fn write_report<W: Write>(sink: W, rows: &[PassengerSummary]) -> OutputResult<()> {
    let mut w = csv::Writer::from_writer(sink);
    w.write_record(HEADER)?;
    for row in rows {
        w.write_record(row.record())?;
    }

    let stats = aggregate(rows);
    w.write_record([""; 10])?;
    for (label, m) in [("Wait Times", stats.wait), ("Total Times", stats.total)] {
        let mut line: [String; 10] = Default::default();
        line[0] = format!("{label}: Min={}, Max={}, Mean={}", m.min, m.max, m.mean);
        w.write_record(&line)?;
    }
    w.flush()?;
    Ok(())
}
