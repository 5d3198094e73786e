//! The `Sim` struct and its step loop.

use helm_agent::{Agent, AgentState, Helm};
use helm_control::Controller;
use helm_core::{SimConfig, Step};
use log::{debug, error, info};

use crate::{SimError, SimObserver, SimResult};

/// The simulation runner: one agent, one controller, one step counter.
///
/// The agent is private.  The controller sees it only through a [`Helm`]
/// for the duration of each `steer` call, and outside code gets `&Agent`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: Controller> {
    /// Loop configuration (total steps, progress interval).
    pub config: SimConfig,

    pub(crate) agent:      Agent,
    pub(crate) controller: C,

    /// Completed steps.
    pub(crate) step: Step,
}

impl<C: Controller> Sim<C> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[inline]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Number of completed steps.
    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.config.end_step()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()`.
    ///
    /// Records the current state with `on_start`, every following state with
    /// `on_step`, then calls `on_end`.  On error the observer's `on_abort`
    /// runs and the error is returned; the agent is left as it was when the
    /// error occurred.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "run start: controller={} steps={} agent={}",
            self.controller.name(),
            self.config.total_steps,
            self.agent,
        );

        let result = self.run_to_end(observer);
        match &result {
            Ok(()) => info!(
                "run end: {} steps, final position {}",
                self.step.0,
                self.agent.position(),
            ),
            Err(e) => self.abort(observer, e),
        }
        result
    }

    /// Advance exactly `n` steps from the current one (ignores `end_step`).
    ///
    /// No `on_start`/`on_end` calls; useful for tests and incremental
    /// stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if let Err(e) = self.advance(observer) {
                self.abort(observer, &e);
                return Err(e);
            }
        }
        Ok(())
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn run_to_end<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_start(self.step, &self.agent.state()).map_err(SimError::Sink)?;
        while !self.is_finished() {
            self.advance(observer)?;
        }
        observer.on_end(self.step).map_err(SimError::Sink)?;
        Ok(())
    }

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<AgentState> {
        // ── Steer ─────────────────────────────────────────────────────────
        self.controller.steer(&mut Helm::new(&mut self.agent))?;

        // ── Update ────────────────────────────────────────────────────────
        self.agent.update()?;
        self.step = self.step.next();

        // ── Record ────────────────────────────────────────────────────────
        let state = self.agent.state();
        observer.on_step(self.step, &state).map_err(SimError::Sink)?;

        let interval = self.config.progress_interval;
        if interval > 0 && self.step.0 % interval == 0 {
            debug!(
                "{}: y={:.4} heading={:.2} turn_rate={:.2}",
                self.step, state.y, state.heading, state.turn_rate,
            );
        }
        Ok(state)
    }

    fn abort<O: SimObserver>(&self, observer: &mut O, e: &SimError) {
        error!("run aborted after {} steps: {e}", self.step.0);
        observer.on_abort(self.step, e);
    }
}
