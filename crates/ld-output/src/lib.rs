//! `ld-output` — event trace writers and the passenger summary report.
//!
//! Two trace backends, selected by Cargo feature:
//!
//! | Feature   | Backend     | Files created   |
//! |-----------|-------------|-----------------|
//! | *(none)*  | CSV         | `events.csv`    |
//! | `sqlite`  | SQLite      | `trace.db`      |
//!
//! Both implement [`TraceWriter`] and are driven by [`TraceObserver`], which
//! implements `ld_sim::SimObserver`.  The [`summary`] module turns the
//! recorded events into `passenger_summary.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ld_output::{CsvTraceWriter, PassengerSummary, TraceObserver, summary};
//!
//! let mut obs = TraceObserver::new(CsvTraceWriter::new(Path::new("./out"))?);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! let rows = PassengerSummary::from_events(&requests, &obs.events().events);
//! summary::write_csv(&Path::new("./out").join(summary::SUMMARY_FILE), &rows)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::EventRow;
pub use summary::{Aggregate, MetricStats, PassengerSummary, aggregate};
pub use writer::TraceWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTraceWriter;
