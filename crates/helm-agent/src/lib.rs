//! `helm-agent`: the controlled body and its actuation model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`agent`]   | `Agent`: position, heading, turn-rate ramp, kinematic update |
//! | [`state`]   | `AgentState` snapshot, `AgentConfig` construction input       |
//! | [`helm`]    | `Helm<'a>`: read-only view plus the single steering command  |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Capability split
//!
//! Controllers never see `&mut Agent`.  The simulation loop lends them a
//! [`Helm`], which exposes read-only accessors and exactly one mutator,
//! [`Helm::command_turn_rate`].  Everything else about the agent changes only
//! inside [`Agent::update`].

pub mod agent;
pub mod error;
pub mod helm;
pub mod state;


pub use agent::{Agent, TURN_RATE_LIMIT, TURN_RATE_STEP, TURN_RATE_TOLERANCE};
pub use error::{AgentError, AgentResult};
pub use helm::Helm;
pub use state::{AgentConfig, AgentState};
