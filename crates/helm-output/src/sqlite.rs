//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the configured output directory with one table,
//! `states`, holding the same columns as `states.csv`.  Like the CSV files,
//! the table is emptied when a new writer opens it.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, StateRow};

/// Writes recorded states to an SQLite database.
///
/// Rows are buffered in one open transaction and committed by
/// [`finish`](OutputWriter::finish).  Dropping the writer without finishing
/// rolls the buffered rows back.
///
/// Behind a [`SimOutputObserver`](crate::SimOutputObserver) an aborted run
/// still commits: `on_abort` calls `finish`, so the table holds every row up
/// to the failure.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and recreate an empty `states`
    /// table.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS states;
             CREATE TABLE states (
                 step                     INTEGER PRIMARY KEY,
                 x                        REAL    NOT NULL,
                 y                        REAL    NOT NULL,
                 speed                    REAL    NOT NULL,
                 heading                  REAL    NOT NULL,
                 turn_rate                REAL    NOT NULL,
                 turn_rate_target         REAL    NOT NULL,
                 instantaneous_deflection INTEGER NOT NULL
             );
             BEGIN;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        let s = &row.state;
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO states \
             (step, x, y, speed, heading, turn_rate, turn_rate_target, instantaneous_deflection) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(rusqlite::params![
            row.step as i64,
            s.x,
            s.y,
            s.speed,
            s.heading,
            s.turn_rate,
            s.turn_rate_target,
            s.instantaneous_deflection as i64,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("COMMIT; PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
