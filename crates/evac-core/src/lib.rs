//! `evac-core` — foundational types for the `evacsim` cabin-evacuation
//! simulator.
//!
//! This crate is a dependency of every other `evac-*` crate.  It intentionally
//! has no `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `PassengerId`, `RowId`, `TrialId`                       |
//! | [`age`]    | `AgeBand` enum                                          |
//! | [`config`] | `CabinConfig`, `McConfig` + validation                  |
//! | [`rng`]    | `TrialRng` (per-trial deterministic generator)          |
//! | [`error`]  | `ConfigError`, `ConfigResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod age;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use age::AgeBand;
pub use config::{CabinConfig, McConfig};
pub use error::{ConfigError, ConfigResult};
pub use ids::{PassengerId, RowId, TrialId};
pub use rng::TrialRng;
