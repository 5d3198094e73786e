use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    /// A constructor or setter argument was out of range.  Values are never
    /// clamped.
    #[error("invalid argument: {name} = {value} (expected {expected})")]
    InvalidArgument {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },

    /// Internal state left its bounds.  The agent is inconsistent and must
    /// not be advanced further.
    #[error("invariant violated: {name} = {value} exceeds limit {limit}")]
    InvariantViolation {
        name:  &'static str,
        value: f64,
        limit: f64,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
