//! Plain data row type written by output backends.

use helm_agent::AgentState;
use helm_core::Step;

/// One recorded agent state.  Step 0 is the initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRow {
    pub step:  u64,
    pub state: AgentState,
}

impl StateRow {
    #[inline]
    pub fn new(step: Step, state: AgentState) -> Self {
        Self { step: step.0, state }
    }

    /// Column names in the order of [`fields`](Self::fields).
    pub const HEADER: [&'static str; 8] = [
        "step",
        "x",
        "y",
        "speed",
        "heading",
        "turn_rate",
        "turn_rate_target",
        "instantaneous_deflection",
    ];

    /// Every column rendered as text.  Floats use the shortest form that
    /// parses back to the same value.
    pub fn fields(&self) -> [String; 8] {
        let s = &self.state;
        [
            self.step.to_string(),
            s.x.to_string(),
            s.y.to_string(),
            s.speed.to_string(),
            s.heading.to_string(),
            s.turn_rate.to_string(),
            s.turn_rate_target.to_string(),
            s.instantaneous_deflection.to_string(),
        ]
    }
}
