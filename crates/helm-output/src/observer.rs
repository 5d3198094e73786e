//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use helm_agent::AgentState;
use helm_core::Step;
use helm_sim::{ObserverResult, SimError, SimObserver};
use log::warn;

use crate::row::StateRow;
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes every recorded state to any
/// [`OutputWriter`] backend.
///
/// Write errors are returned to the simulation loop, which stops the run.
/// On abort the writer is flushed so the rows up to the failure are on disk;
/// the run's error says where the trace ends.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:  W,
    written: u64,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, step: Step, state: &AgentState) -> ObserverResult {
        self.writer.write_state(&StateRow::new(step, *state))?;
        self.written += 1;
        Ok(())
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, step: Step, initial: &AgentState) -> ObserverResult {
        self.write(step, initial)
    }

    fn on_step(&mut self, step: Step, state: &AgentState) -> ObserverResult {
        self.write(step, state)
    }

    fn on_end(&mut self, _final_step: Step) -> ObserverResult {
        self.writer.finish()?;
        Ok(())
    }

    fn on_abort(&mut self, step: Step, _error: &SimError) {
        if let Err(e) = self.writer.finish() {
            warn!("could not flush output after abort at {step}: {e}");
        }
    }
}
