//! The controller-facing view of an agent.

use helm_core::Position;

use crate::{Agent, AgentResult, AgentState};

/// A borrowed agent that can be read but only steered.
///
/// The simulation loop builds a `Helm` around its agent for each controller
/// call.  Controllers may read any field; the one write they can make is
/// [`command_turn_rate`][Self::command_turn_rate].  Position, speed, heading
/// and the current turn rate stay under the agent's own control.
pub struct Helm<'a> {
    agent: &'a mut Agent,
}

impl<'a> Helm<'a> {
    #[inline]
    pub fn new(agent: &'a mut Agent) -> Self {
        Self { agent }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.agent.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.agent.y()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.agent.position()
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.agent.speed()
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.agent.heading()
    }

    #[inline]
    pub fn turn_rate(&self) -> f64 {
        self.agent.turn_rate()
    }

    #[inline]
    pub fn turn_rate_target(&self) -> f64 {
        self.agent.turn_rate_target()
    }

    #[inline]
    pub fn is_deflection_instantaneous(&self) -> bool {
        self.agent.is_deflection_instantaneous()
    }

    pub fn state(&self) -> AgentState {
        self.agent.state()
    }

    pub fn is_proximate(&self, x: f64, y: f64, distance: f64) -> AgentResult<bool> {
        self.agent.is_proximate(x, y, distance)
    }

    /// Request a turn rate in degrees per step.  Rejected if `|delta| > 5`.
    pub fn command_turn_rate(&mut self, delta: f64) -> AgentResult<()> {
        self.agent.set_turn_rate_target(delta)
    }
}
