//! Serializable choice of steering policy.

use crate::{Controller, PidController, PidGains, ThresholdController};

/// Which policy to run, with its parameters.
///
/// With the `serde` feature this is internally tagged:
///
/// ```json
/// { "policy": "threshold" }
/// { "policy": "pid", "gains": { "kp": -0.01, "ki": 0.000001, "kd": -0.03 } }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum ControllerConfig {
    Threshold,
    Pid {
        #[cfg_attr(feature = "serde", serde(default))]
        gains: PidGains,
    },
}

impl ControllerConfig {
    /// Build a fresh controller.  Each call returns independent state.
    pub fn build(&self) -> Box<dyn Controller> {
        match self {
            ControllerConfig::Threshold => Box::new(ThresholdController),
            ControllerConfig::Pid { gains } => Box::new(PidController::new(*gains)),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig::Pid { gains: PidGains::REFERENCE }
    }
}
