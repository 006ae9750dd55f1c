//! SQLite trace backend (feature `sqlite`).
//!
//! Creates `trace.db` in the configured output directory with one `events`
//! table.  `seq` preserves emission order within a tick.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::TraceWriter;
use crate::{EventRow, OutputResult};

pub const TRACE_DB: &str = "trace.db";

/// Writes the event trace to an SQLite database.
pub struct SqliteTraceWriter {
    conn:     Connection,
    next_seq: i64,
    finished: bool,
}

impl SqliteTraceWriter {
    /// Open (or create) `trace.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(TRACE_DB))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq          INTEGER PRIMARY KEY,
                 tick         INTEGER NOT NULL,
                 event        TEXT    NOT NULL,
                 passenger_id TEXT,
                 elevator_id  INTEGER,
                 floor        INTEGER,
                 message      TEXT    NOT NULL
             );",
        )?;
        let next_seq = conn.query_row("SELECT COALESCE(MAX(seq), -1) + 1 FROM events", [], |r| r.get(0))?;

        Ok(Self { conn, next_seq, finished: false })
    }
}

impl TraceWriter for SqliteTraceWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (seq, tick, event, passenger_id, elevator_id, floor, message) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    self.next_seq,
                    row.tick,
                    row.event,
                    row.passenger_id,
                    row.elevator_id,
                    row.floor,
                    row.message,
                ])?;
                self.next_seq += 1;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
