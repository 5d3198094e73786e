//! `helm-core`: foundational types for the `helm` heading-control simulator.
//!
//! This crate is a dependency of every other `helm-*` crate.  It has no
//! `helm-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`geo`]   | `Position`, compass/mathematical angle conversion           |
//! | [`time`]  | `Step`, `SimConfig`                                         |
//! | [`error`] | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{CIRCLE_DEGREES, Position, compass_to_radians, normalize_degrees};
pub use time::{SimConfig, Step};
