//! `TraceObserver<W>`: bridges `SimObserver` to a `TraceWriter`.

use ld_core::{EventLog, EventSink, SimEvent, Tick};
use ld_elevator::Elevator;
use ld_sim::{RunOutcome, SimObserver};

use crate::writer::TraceWriter;
use crate::{EventRow, OutputError, OutputResult};

/// A [`SimObserver`] that writes every event to a [`TraceWriter`] backend
/// and keeps an in-memory [`EventLog`] for the summary report.
///
/// Events are batched per tick and written at the tick boundary.  Writer
/// errors are stored because observer hooks return nothing; check
/// [`take_error`][Self::take_error] after `sim.run()`.
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    log:        EventLog,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            log:        EventLog::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Every event seen so far.
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn into_parts(self) -> (W, EventLog) {
        (self.writer, self.log)
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("trace write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> EventSink for TraceObserver<W> {
    fn emit(&mut self, event: SimEvent) {
        self.pending.push(EventRow::from(&event));
        self.log.emit(event);
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, _fleet: &[Elevator]) {
        self.flush();
    }

    fn on_sim_end(&mut self, _outcome: &RunOutcome) {
        self.flush();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
