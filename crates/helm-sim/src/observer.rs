//! Simulation observer trait and the two bundled observers.

use helm_agent::AgentState;
use helm_core::Step;

use crate::{SimError, SinkError};

/// Result of an observer hook.  An `Err` aborts the run.
pub type ObserverResult = Result<(), SinkError>;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the state evolves.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: y printer
///
/// ```rust,ignore
/// struct PrintY;
///
/// impl SimObserver for PrintY {
///     fn on_step(&mut self, step: Step, state: &AgentState) -> ObserverResult {
///         println!("{step}: y = {}", state.y);
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first step with the state the run starts
    /// from.  `step` is `Step::ZERO` unless the sim was advanced earlier with
    /// `run_steps`.
    fn on_start(&mut self, _step: Step, _initial: &AgentState) -> ObserverResult {
        Ok(())
    }

    /// Called after each agent update.  `step` counts completed steps, so
    /// the first call receives `Step(1)`.
    fn on_step(&mut self, _step: Step, _state: &AgentState) -> ObserverResult {
        Ok(())
    }

    /// Called once after the final step completes.
    fn on_end(&mut self, _final_step: Step) -> ObserverResult {
        Ok(())
    }

    /// Called when the run stops on an error, before the error is returned.
    ///
    /// `step` is the last completed step.
    fn on_abort(&mut self, _step: Step, _error: &SimError) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every recorded state in memory, initial state first.
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder {
    states: Vec<AgentState>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[AgentState] {
        &self.states
    }

    pub fn into_states(self) -> Vec<AgentState> {
        self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Largest `|y|` over the last `window` recorded states.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn trailing_peak_abs_y(&self, window: usize) -> Option<f64> {
        let start = self.states.len().saturating_sub(window);
        self.states[start..]
            .iter()
            .map(|s| s.y.abs())
            .reduce(f64::max)
    }
}

impl SimObserver for TraceRecorder {
    fn on_start(&mut self, _step: Step, initial: &AgentState) -> ObserverResult {
        self.states.push(*initial);
        Ok(())
    }

    fn on_step(&mut self, _step: Step, state: &AgentState) -> ObserverResult {
        self.states.push(*state);
        Ok(())
    }
}
