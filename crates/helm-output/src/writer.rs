//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StateRow};

/// Trait implemented by the CSV, trace, and SQLite writers.
pub trait OutputWriter {
    /// Append one recorded state.
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()>;

    /// Flush everything written so far.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fan out to two writers.  Both see every row; the first error wins.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        self.0.write_state(row)?;
        self.1.write_state(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
