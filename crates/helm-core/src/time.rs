//! Simulation step model.
//!
//! Time is a monotonically increasing `Step` counter.  One step is one
//! controller decision followed by one kinematic update; there is no
//! wall-clock mapping because the kinematics are expressed per step
//! (speed is distance per step, turn rate is degrees per step).

use std::fmt;

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Loop configuration for one run.
///
/// Typically part of a JSON run file loaded by the application and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total steps to simulate.  Zero is allowed and records only the
    /// initial state.
    pub total_steps: u64,

    /// Log progress every N steps at `debug` level.  0 disables progress
    /// logging.
    pub progress_interval: u64,
}

impl SimConfig {
    pub const DEFAULT_TOTAL_STEPS: u64 = 5_000;

    pub fn new(total_steps: u64) -> Self {
        Self { total_steps, ..Self::default() }
    }

    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_steps:       Self::DEFAULT_TOTAL_STEPS,
            progress_interval: 1_000,
        }
    }
}
