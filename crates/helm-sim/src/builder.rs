//! Fluent builder for constructing a [`Sim`].

use helm_agent::{Agent, AgentConfig};
use helm_control::Controller;
use helm_core::{SimConfig, Step};

use crate::{RunConfig, Sim, SimResult};

/// Where the agent comes from.
enum AgentSource {
    Ready(Agent),
    Config(AgentConfig),
}

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: step count and progress logging interval
/// - `C: Controller`: the steering policy
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                   |
/// |----------------------|-------------------------------------------|
/// | `.agent(a)`          | agent built from `.agent_config`          |
/// | `.agent_config(c)`   | `AgentConfig::default()` (reference boat) |
/// | `.reset_controller()`| controller state used as given            |
///
/// `.agent` and `.agent_config` replace each other; the last call wins.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(5_000), PidController::default())
///     .agent(Agent::new(0.0, -20.0, 1.0, 45.0, false)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: Controller> {
    config:           SimConfig,
    controller:       C,
    agent:            Option<AgentSource>,
    reset_controller: bool,
}

impl<C: Controller> SimBuilder<C> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, controller: C) -> Self {
        Self {
            config,
            controller,
            agent:            None,
            reset_controller: false,
        }
    }

    /// Use an already constructed agent.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agent = Some(AgentSource::Ready(agent));
        self
    }

    /// Construct the agent from `config` during [`build`](Self::build).
    ///
    /// Invalid values surface as [`SimError::Agent`][crate::SimError::Agent]
    /// from `build`.
    pub fn agent_config(mut self, config: AgentConfig) -> Self {
        self.agent = Some(AgentSource::Config(config));
        self
    }

    /// Clear the controller's internal state before the first step.
    ///
    /// Needed when reusing a controller value across runs.
    pub fn reset_controller(mut self) -> Self {
        self.reset_controller = true;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] at step 0.
    pub fn build(mut self) -> SimResult<Sim<C>> {
        let agent = match self.agent {
            Some(AgentSource::Ready(agent)) => agent,
            Some(AgentSource::Config(cfg)) => Agent::from_config(&cfg)?,
            None => Agent::from_config(&AgentConfig::default())?,
        };

        if self.reset_controller {
            self.controller.reset();
        }

        Ok(Sim {
            config:     self.config,
            agent,
            controller: self.controller,
            step:       Step::ZERO,
        })
    }
}

impl SimBuilder<Box<dyn Controller>> {
    /// Builder for a full run description: agent, loop, and policy.
    pub fn from_run_config(run: &RunConfig) -> Self {
        SimBuilder::new(run.sim.clone(), run.controller.build())
            .agent_config(run.agent.clone())
    }
}
