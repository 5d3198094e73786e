//! Plain data views of an agent: the recorded snapshot and the construction
//! input.

use std::fmt;

use helm_core::Position;

/// A copy of every agent field at one instant.
///
/// Field order matches the seven-column record format:
/// `x, y, speed, heading, turn_rate, turn_rate_target, instantaneous_deflection`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub x:                        f64,
    pub y:                        f64,
    pub speed:                    f64,
    pub heading:                  f64,
    pub turn_rate:                f64,
    pub turn_rate_target:         f64,
    pub instantaneous_deflection: bool,
}

impl AgentState {
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Comma-separated seven-field record, no trailing newline.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.x,
            self.y,
            self.speed,
            self.heading,
            self.turn_rate,
            self.turn_rate_target,
            self.instantaneous_deflection,
        )
    }

    /// Space-separated `x y` pair for gnuplot-style traces.
    pub fn to_trace(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Agent{{x={} y={} speed={} heading={} turn_rate={} turn_rate_target={} instantaneous_deflection={}}}",
            self.x,
            self.y,
            self.speed,
            self.heading,
            self.turn_rate,
            self.turn_rate_target,
            self.instantaneous_deflection,
        )
    }
}

/// Initial conditions for [`Agent::from_config`][crate::Agent::from_config].
///
/// `Default` is the reference scenario: `(0, -20)`, speed 1, heading 45°,
/// ramped deflection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    pub x:                        f64,
    pub y:                        f64,
    pub speed:                    f64,
    pub heading:                  f64,
    pub instantaneous_deflection: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            x:                        0.0,
            y:                        -20.0,
            speed:                    1.0,
            heading:                  45.0,
            instantaneous_deflection: false,
        }
    }
}
