//! The `TraceWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult};

/// Trait implemented by the CSV and SQLite trace writers.
///
/// Errors surface to [`TraceObserver`][crate::TraceObserver], which keeps the
/// first one for [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Append a batch of events, in order.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
