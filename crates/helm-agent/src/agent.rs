//! The `Agent` struct and its one-step update.

use std::fmt;

use helm_core::{CIRCLE_DEGREES, Position, normalize_degrees};

use crate::{AgentConfig, AgentError, AgentResult, AgentState};

/// Largest turn-rate magnitude, in degrees per step, in either direction.
pub const TURN_RATE_LIMIT: f64 = 5.0;

/// How far the turn rate moves toward its target per step when deflection is
/// ramped.
pub const TURN_RATE_STEP: f64 = 0.1;

/// Half-width of the band around the target inside which a ramped turn rate
/// snaps exactly onto the target.
pub const TURN_RATE_TOLERANCE: f64 = 0.1;

/// A constant-speed point agent steered by its turn rate.
///
/// The agent starts at a position with a compass heading and a speed.  From
/// there only the turn-rate target can be commanded (see [`Helm`][crate::Helm]);
/// each [`update`][Self::update] moves the turn rate toward the target, turns
/// the heading by the turn rate, then moves `speed` units along the new
/// heading.
///
/// # Invariants
///
/// - `speed >= 0`, fixed at construction.
/// - `0 <= heading < 360`.
/// - `|turn_rate| <= TURN_RATE_LIMIT` and `|turn_rate_target| <= TURN_RATE_LIMIT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    position:                 Position,
    speed:                    f64,
    heading:                  f64,
    turn_rate:                f64,
    turn_rate_target:         f64,
    instantaneous_deflection: bool,
}

impl Agent {
    /// Create an agent at `(x, y)` moving at `speed` along compass `heading`.
    ///
    /// `heading` may be anywhere in `[0, 360]`; exactly 360 is stored as 0.
    /// With `instantaneous_deflection` a commanded turn rate takes effect at
    /// once, otherwise it is approached by [`TURN_RATE_STEP`] per update.
    pub fn new(
        x:                        f64,
        y:                        f64,
        speed:                    f64,
        heading:                  f64,
        instantaneous_deflection: bool,
    ) -> AgentResult<Self> {
        // Negated comparisons so NaN is rejected too.
        if !(speed >= 0.0) {
            return Err(AgentError::InvalidArgument {
                name:     "speed",
                value:    speed,
                expected: "speed >= 0",
            });
        }
        if !(0.0..=CIRCLE_DEGREES).contains(&heading) {
            return Err(AgentError::InvalidArgument {
                name:     "heading",
                value:    heading,
                expected: "0 <= heading <= 360",
            });
        }

        Ok(Self {
            position: Position::new(x, y),
            speed,
            heading: normalize_degrees(heading),
            turn_rate: 0.0,
            turn_rate_target: 0.0,
            instantaneous_deflection,
        })
    }

    pub fn from_config(config: &AgentConfig) -> AgentResult<Self> {
        Self::new(
            config.x,
            config.y,
            config.speed,
            config.heading,
            config.instantaneous_deflection,
        )
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Compass heading in degrees, `[0, 360)`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Degrees applied to the heading on the next update.
    #[inline]
    pub fn turn_rate(&self) -> f64 {
        self.turn_rate
    }

    #[inline]
    pub fn turn_rate_target(&self) -> f64 {
        self.turn_rate_target
    }

    #[inline]
    pub fn is_deflection_instantaneous(&self) -> bool {
        self.instantaneous_deflection
    }

    /// Snapshot of every field.
    pub fn state(&self) -> AgentState {
        AgentState {
            x:                        self.position.x,
            y:                        self.position.y,
            speed:                    self.speed,
            heading:                  self.heading,
            turn_rate:                self.turn_rate,
            turn_rate_target:         self.turn_rate_target,
            instantaneous_deflection: self.instantaneous_deflection,
        }
    }

    /// Seven-field comma-separated state.
    pub fn state_csv(&self) -> String {
        self.state().to_csv()
    }

    /// Two-column `x y` state for gnuplot traces.
    pub fn state_trace(&self) -> String {
        self.state().to_trace()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Whether the agent is within `distance` of `(x, y)`, boundary included.
    pub fn is_proximate(&self, x: f64, y: f64, distance: f64) -> AgentResult<bool> {
        if !(distance > 0.0) {
            return Err(AgentError::InvalidArgument {
                name:     "distance",
                value:    distance,
                expected: "distance > 0",
            });
        }
        Ok(self.position.distance(Position::new(x, y)) <= distance)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Set the desired turn rate in degrees per step.
    ///
    /// With instantaneous deflection the current turn rate jumps to `delta`
    /// immediately; otherwise it ramps there over the following updates.
    pub fn set_turn_rate_target(&mut self, delta: f64) -> AgentResult<()> {
        if !(delta.abs() <= TURN_RATE_LIMIT) {
            return Err(AgentError::InvalidArgument {
                name:     "turn_rate_target",
                value:    delta,
                expected: "-5 <= turn_rate_target <= 5",
            });
        }

        self.turn_rate_target = delta;
        if self.instantaneous_deflection {
            self.turn_rate = delta;
        }
        Ok(())
    }

    /// Advance one step: converge the turn rate, turn, then move along the
    /// new heading.
    ///
    /// Returns [`AgentError::InvariantViolation`] if the turn rate left its
    /// bounds; the heading and position are untouched in that case.
    pub fn update(&mut self) -> AgentResult<()> {
        self.update_turn_rate()?;
        self.update_heading();
        self.update_position();
        Ok(())
    }

    fn update_turn_rate(&mut self) -> AgentResult<()> {
        if !self.instantaneous_deflection {
            if self.turn_rate < self.turn_rate_target - TURN_RATE_TOLERANCE {
                self.turn_rate += TURN_RATE_STEP;
            } else if self.turn_rate > self.turn_rate_target + TURN_RATE_TOLERANCE {
                self.turn_rate -= TURN_RATE_STEP;
            } else {
                self.turn_rate = self.turn_rate_target;
            }
        }

        if !(self.turn_rate.abs() <= TURN_RATE_LIMIT) {
            return Err(AgentError::InvariantViolation {
                name:  "turn_rate",
                value: self.turn_rate,
                limit: TURN_RATE_LIMIT,
            });
        }
        Ok(())
    }

    /// Overwrite the current turn rate without any bounds check.
    ///
    /// Only for exercising the invariant-violation path of
    /// [`update`](Self::update) from tests in this and downstream crates.
    #[cfg(any(test, feature = "test-hooks"))]
    #[doc(hidden)]
    pub fn force_turn_rate(&mut self, turn_rate: f64) {
        self.turn_rate = turn_rate;
    }

    fn update_heading(&mut self) {
        self.heading = normalize_degrees(self.heading + self.turn_rate);
    }

    fn update_position(&mut self) {
        self.position = self.position.advanced(self.heading, self.speed);
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state(), f)
    }
}
