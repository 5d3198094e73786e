use helm_agent::AgentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("steering command rejected: {0}")]
    Agent(#[from] AgentError),
}

pub type ControlResult<T> = Result<T, ControlError>;
