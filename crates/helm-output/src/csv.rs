//! CSV and gnuplot trace backends.
//!
//! - [`CsvWriter`] creates `states.csv`: header plus one eight-column row
//!   (step and the seven agent fields) per recorded state.
//! - [`TraceWriter`] creates `trace.dat`: one `x y` line per recorded
//!   state, space-delimited, no header.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, StateRow};

/// Writes full agent state to `states.csv`.
pub struct CsvWriter {
    states:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    pub const FILE_NAME: &'static str = "states.csv";

    /// Create (or truncate) `states.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut states = Writer::from_path(dir.join(Self::FILE_NAME))?;
        states.write_record(StateRow::HEADER)?;
        Ok(Self { states, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        self.states.write_record(row.fields())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.states.flush()?;
        Ok(())
    }
}

/// Writes the two-column position trace to `trace.dat`.
pub struct TraceWriter {
    trace:    Writer<File>,
    finished: bool,
}

impl TraceWriter {
    pub const FILE_NAME: &'static str = "trace.dat";

    /// Create (or truncate) `trace.dat` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trace = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_path(dir.join(Self::FILE_NAME))?;
        Ok(Self { trace, finished: false })
    }
}

impl OutputWriter for TraceWriter {
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        self.trace
            .write_record([row.state.x.to_string(), row.state.y.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        Ok(())
    }
}
