//! PID policy with a bang-bang output stage.

use helm_agent::Helm;
use log::trace;

use crate::controller::bang_bang;
use crate::{ControlResult, Controller, REFERENCE_Y};

/// Proportional, integral and derivative gains.
///
/// The signs matter: with the reference gains `kp < 0`, `ki > 0`, `kd < 0`.
/// Flipping the sign of `kp` or `kd` inverts the feedback and the agent
/// steers away from the line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl PidGains {
    /// Gains of the reference run.
    pub const REFERENCE: PidGains = PidGains { kp: -0.01, ki: 0.000_001, kd: -0.03 };

    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// PID feedback on the cross-track error `0 - y`.
///
/// Each step:
///
/// ```text
/// error      = REFERENCE_Y - y
/// integral  += error                 (unit step, no time scaling)
/// derivative = error - previous_error
/// output     = kp*error + ki*integral + kd*derivative
/// ```
///
/// The output is not applied as a turn rate.  Its sign picks the command:
/// `-1` when `output < 0`, otherwise `+1`.
#[derive(Debug, Clone)]
pub struct PidController {
    gains:          PidGains,
    integral:       f64,
    previous_error: f64,
    last_output:    f64,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            integral:       0.0,
            previous_error: 0.0,
            last_output:    0.0,
        }
    }

    #[inline]
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    #[inline]
    pub fn integral(&self) -> f64 {
        self.integral
    }

    #[inline]
    pub fn previous_error(&self) -> f64 {
        self.previous_error
    }

    /// Output of the most recent [`steer`][Controller::steer] call; 0 before
    /// the first.
    #[inline]
    pub fn last_output(&self) -> f64 {
        self.last_output
    }

    /// Feed one measurement through the PID law and return its output.
    pub fn compute(&mut self, measured_y: f64) -> f64 {
        let PidGains { kp, ki, kd } = self.gains;

        let error = REFERENCE_Y - measured_y;
        self.integral += error;
        let derivative = error - self.previous_error;
        let output = kp * error + ki * self.integral + kd * derivative;

        self.previous_error = error;
        self.last_output = output;
        trace!(
            "pid: error={error} integral={} derivative={derivative} output={output}",
            self.integral
        );
        output
    }
}

impl Default for PidController {
    fn default() -> Self {
        Self::new(PidGains::REFERENCE)
    }
}

impl Controller for PidController {
    fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()> {
        let output = self.compute(helm.y());
        helm.command_turn_rate(bang_bang(output))?;
        Ok(())
    }

    fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = 0.0;
        self.last_output = 0.0;
    }

    fn name(&self) -> &str {
        "pid"
    }
}
