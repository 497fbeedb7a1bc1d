//! Deterministic per-trial RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each Monte Carlo trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = master_seed XOR (trial_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state (no contention, no ordering dependency),
//!   so a batch can be fanned out across worker threads without any
//!   synchronisation or correlated draws.
//! - Growing a batch from N to N+k trials does not disturb the draws of the
//!   first N trials — runs are reproducible as batches scale.
//! - Replaying a single trial only needs the master seed and its `TrialId`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrialId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TrialRng ──────────────────────────────────────────────────────────────────

/// Per-trial deterministic RNG.
///
/// Create one at the start of each trial and thread it through every
/// stochastic constructor (`&mut TrialRng`) — nothing in the workspace reads
/// a global or thread-local generator.  The type is `!Sync` to prevent
/// accidental sharing across threads; each worker owns the generators for
/// the trials it runs.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the batch's master seed and a trial ID.
    pub fn new(master_seed: u64, trial: TrialId) -> Self {
        let seed = master_seed ^ (trial.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
