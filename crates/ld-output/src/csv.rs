//! CSV trace backend.
//!
//! Creates `events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::cell;
use crate::writer::TraceWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "events.csv";

/// Writes the event trace to a single CSV file.
pub struct CsvTraceWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["tick", "event", "passenger_id", "elevator_id", "floor", "message"])?;
        Ok(Self { events, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.event.to_owned(),
                cell(row.passenger_id.as_deref()),
                cell(row.elevator_id),
                cell(row.floor),
                row.message.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
