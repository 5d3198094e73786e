//! `helm-control`: steering policies.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`controller`] | `Controller` trait, reference-line constants               |
//! | [`threshold`]  | `ThresholdController`: bang-bang on the sign of `y`       |
//! | [`pid`]        | `PidController`, `PidGains`                                |
//! | [`config`]     | `ControllerConfig`: tagged choice between the two         |
//! | [`error`]      | `ControlError`, `ControlResult<T>`                         |
//!
//! # Design notes
//!
//! A controller is called once per step with a [`Helm`][helm_agent::Helm].
//! It may read anything the helm exposes and may issue at most the one
//! steering command.  Controller state (the PID integrator) lives in the
//! controller value itself, so two runs built from fresh controllers never
//! share state.

pub mod config;
pub mod controller;
pub mod error;
pub mod pid;
pub mod threshold;


pub use config::ControllerConfig;
pub use controller::{COMMAND_MAGNITUDE, Controller, REFERENCE_Y};
pub use error::{ControlError, ControlResult};
pub use pid::{PidController, PidGains};
pub use threshold::ThresholdController;
