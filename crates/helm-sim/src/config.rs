//! Whole-run configuration and its JSON loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use helm_agent::AgentConfig;
use helm_control::ControllerConfig;
use helm_core::{CoreError, SimConfig};
use serde::{Deserialize, Serialize};

use crate::SimResult;

/// Everything needed to reproduce one run.
///
/// Missing sections fall back to the reference run: the boat at `(0, -20)`
/// heading 45° at speed 1 with ramped deflection, 5000 steps, PID with the
/// reference gains.
///
/// ```json
/// {
///   "agent": { "x": 0.0, "y": -20.0, "speed": 1.0, "heading": 45.0,
///              "instantaneous_deflection": false },
///   "sim": { "total_steps": 5000, "progress_interval": 1000 },
///   "controller": { "policy": "pid",
///                   "gains": { "kp": -0.01, "ki": 0.000001, "kd": -0.03 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub agent:      AgentConfig,
    pub sim:        SimConfig,
    pub controller: ControllerConfig,
}

impl RunConfig {
    /// Parse a JSON run description.
    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        let config: RunConfig = serde_json::from_reader(reader)
            .map_err(|e| CoreError::Parse(format!("run config: {e}")))?;
        Ok(config)
    }

    /// Load a JSON run description from `path`.
    pub fn load(path: &Path) -> SimResult<Self> {
        let file = File::open(path).map_err(CoreError::from)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Pretty-printed JSON, e.g. to write a template next to the output.
    pub fn to_json_pretty(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Parse(format!("run config: {e}")).into())
    }
}
