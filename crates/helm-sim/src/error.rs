use helm_agent::AgentError;
use helm_control::ControlError;
use helm_core::CoreError;
use thiserror::Error;

/// Boxed error raised by a recording sink.
///
/// Boxed so this crate does not depend on any particular output backend.
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("controller error: {0}")]
    Control(#[from] ControlError),

    #[error("recording sink failed: {0}")]
    Sink(SinkError),
}

pub type SimResult<T> = Result<T, SimError>;
