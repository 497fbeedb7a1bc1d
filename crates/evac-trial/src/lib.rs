//! `evac-trial` — Monte Carlo driver for the `evacsim` simulator.
//!
//! # Batch structure
//!
//! ```text
//! for trial in 0..config.trials:          (sequential, or Rayon fan-out)
//!   ① Seed     — TrialRng from master seed + trial index
//!   ② Populate — fresh Cabin, fresh random draws
//!   ③ Simulate — congestion pass → makespan
//! collect exactly `trials` scalars, or abort on the first failure
//! ```
//!
//! Trials share no mutable state; the only shared resource — randomness —
//! is resolved by deriving an independent generator per trial, so the
//! parallel and sequential paths produce bit-identical results.
//!
//! A failed trial aborts the whole batch: callers receive either exactly
//! `trials` values or an error naming the failing trial, never a silently
//! shortened sequence.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the batch on Rayon's thread pool.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_trial::{NoopObserver, TrialRunner};
//!
//! let runner = TrialRunner::new(config)?;
//! let makespans = runner.run_batch(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod runner;


pub use error::{TrialError, TrialResult};
pub use observer::{NoopObserver, TrialObserver};
pub use runner::TrialRunner;
