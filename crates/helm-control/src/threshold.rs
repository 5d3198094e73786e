//! Threshold ("bang-bang") policy.

use helm_agent::Helm;

use crate::controller::bang_bang;
use crate::{ControlResult, Controller};

/// Commands `-1` below the reference line and `+1` on or above it.
///
/// Stateless.  With a ramped agent it never settles: the agent circles on
/// one side of the line or oscillates across it.  Useful as a baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdController;

impl Controller for ThresholdController {
    fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()> {
        let command = bang_bang(helm.y());
        helm.command_turn_rate(command)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "threshold"
    }
}
