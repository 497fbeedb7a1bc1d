//! `evac-passenger` — stochastic passenger model for the `evacsim` simulator.
//!
//! One [`PassengerProfile`] is sampled per occupied seat, once, at cabin
//! population time.  The profile is immutable afterwards: congestion results
//! are kept out of it entirely (they live in `evac-cabin`'s evacuation
//! report), so populated object graphs can be shared read-only with seat-map
//! tooling.
//!
//! # Model
//!
//! ```text
//! baseline_time = baggage_delay
//!               + panic_level · move_time · row_speed_factor · distance_to_exit
//! ```
//!
//! `baggage_delay` is a fixed cost paid at the seat before moving; the
//! product term is the aisle traversal, penalized by panic and the row's
//! speed factor.  A passenger seated in their exit's row (distance 0) pays
//! only the baggage term.

pub mod profile;

#[cfg(test)]
mod tests;

pub use profile::{PassengerProfile, PassengerTraits};
