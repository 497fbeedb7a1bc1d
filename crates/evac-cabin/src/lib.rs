//! `evac-cabin` — seating geometry, population, and the congestion engine
//! for the `evacsim` simulator.
//!
//! # One cabin = one trial
//!
//! ```text
//! Cabin::populate(config, rng)      sample occupancy + demographics,
//!                                   build the boarding line
//! cabin.simulate_evacuation()       group the line into per-exit queues,
//!                                   run the single-file recurrence,
//!                                   → EvacuationReport (makespan)
//! ```
//!
//! The populated [`Cabin`] is immutable after construction; congestion
//! results live in a separate [`EvacuationReport`] keyed by [`PassengerId`],
//! so seat-map and statistics tooling can read both structures without the
//! cabin ever being written twice.
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`seat`]  | `Seat` — one seat, optionally occupied                   |
//! | [`row`]   | `Row`, nearest-exit assignment                           |
//! | [`cabin`] | `Cabin` — rows + passenger arena + boarding line         |
//! | [`queue`] | per-exit queues, single-file recurrence, report          |
//! | [`error`] | `CabinError`, `CabinResult`                              |
//!
//! [`PassengerId`]: evac_core::PassengerId

pub mod cabin;
pub mod error;
pub mod queue;
pub mod row;
pub mod seat;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cabin::Cabin;
pub use error::{CabinError, CabinResult};
pub use queue::{EvacuationReport, LineEntry, single_file_times};
pub use row::{Row, assign_exit};
pub use seat::Seat;
