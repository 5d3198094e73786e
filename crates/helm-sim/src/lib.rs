//! `helm-sim`: fixed-step loop for the helm simulator.
//!
//! # Step loop
//!
//! ```text
//! observer.on_start(initial state)
//! for step in 0..config.total_steps:
//!   ① Steer  : controller.steer(Helm) may command a new turn-rate target.
//!   ② Update : agent converges its turn rate, turns, then moves.
//!   ③ Record : observer.on_step(step + 1, state).
//! observer.on_end(final step)
//! ```
//!
//! Data flows one way: nothing an observer does feeds back into the
//! simulation.  Any error (rejected command, broken agent invariant, failed
//! sink write) stops the run; `on_abort` is called before it is returned.
//!
//! # Quick-start
//!
//! ```rust
//! use helm_agent::AgentConfig;
//! use helm_control::ThresholdController;
//! use helm_core::SimConfig;
//! use helm_sim::{SimBuilder, TraceRecorder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(100), ThresholdController)
//!     .agent_config(AgentConfig::default())
//!     .build()?;
//! let mut trace = TraceRecorder::new();
//! sim.run(&mut trace)?;
//! assert_eq!(trace.len(), 101);
//! # Ok::<(), helm_sim::SimError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::RunConfig;
pub use error::{SimError, SimResult, SinkError};
pub use observer::{NoopObserver, ObserverResult, SimObserver, TraceRecorder};
pub use sim::Sim;
