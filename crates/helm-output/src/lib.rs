//! `helm-output`: recording sinks for the helm simulator.
//!
//! | Feature   | Backend      | Files created                   |
//! |-----------|--------------|---------------------------------|
//! | *(none)*  | CSV          | `states.csv`                    |
//! | *(none)*  | Trace        | `trace.dat` (`x y`, gnuplot)    |
//! | `sqlite`  | SQLite       | `output.db`                     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `helm_sim::SimObserver`.  A pair
//! `(A, B)` of writers is itself a writer, so one run can feed two sinks.
//!
//! Every backend owns its file handles; dropping a writer closes them, so an
//! aborted run never leaks a handle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use helm_output::{CsvWriter, SimOutputObserver, TraceWriter};
//!
//! let writer = (CsvWriter::new(dir)?, TraceWriter::new(dir)?);
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::{CsvWriter, TraceWriter};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::StateRow;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
