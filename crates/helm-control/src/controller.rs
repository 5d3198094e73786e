//! The `Controller` trait: the extension point for steering policies.

use helm_agent::Helm;

use crate::ControlResult;

/// The line `y = REFERENCE_Y` every bundled policy tries to hold.
pub const REFERENCE_Y: f64 = 0.0;

/// Turn-rate magnitude, in degrees per step, issued by the bang-bang
/// policies.
pub const COMMAND_MAGNITUDE: f64 = 1.0;

/// A steering policy.
///
/// Called once per step, before the agent updates.  Implementations read the
/// agent through `helm` and may call [`Helm::command_turn_rate`]; the helm
/// offers no other way to change the agent.
///
/// # Example
///
/// ```rust
/// use helm_agent::Helm;
/// use helm_control::{ControlResult, Controller};
///
/// struct HardLeft;
///
/// impl Controller for HardLeft {
///     fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()> {
///         helm.command_turn_rate(-5.0)?;
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "hard-left"
///     }
/// }
/// ```
pub trait Controller: Send {
    /// Observe the agent and optionally command a new turn-rate target.
    fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()>;

    /// Clear internal state (integrators, previous errors).
    ///
    /// Default: nothing to clear.
    fn reset(&mut self) {}

    /// Short name for logs and summaries.
    fn name(&self) -> &str;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn steer(&mut self, helm: &mut Helm<'_>) -> ControlResult<()> {
        (**self).steer(helm)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Bang-bang decision shared by both bundled policies: below the reference
/// turns one way, at or above it the other.
#[inline]
pub(crate) fn bang_bang(signal: f64) -> f64 {
    if signal < REFERENCE_Y {
        -COMMAND_MAGNITUDE
    } else {
        COMMAND_MAGNITUDE
    }
}
