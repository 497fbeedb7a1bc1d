//! The `TrialRunner` and its batch loop.

use evac_cabin::Cabin;
use evac_core::{McConfig, TrialId, TrialRng};

use crate::{TrialError, TrialObserver, TrialResult};

/// What one trial hands back to the batch loop.
struct TrialOutcome {
    makespan:   f64,
    passengers: usize,
}

/// Runs independent evacuation trials against one configuration.
///
/// The configuration is validated once at construction; every trial after
/// that can only fail for population reasons (an empty or starved cabin),
/// reported as [`TrialError::Trial`] with the offending trial's ID.
pub struct TrialRunner {
    config: McConfig,
}

impl TrialRunner {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `config` and wrap it in a runner.
    pub fn new(config: McConfig) -> TrialResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this runner executes.
    pub fn config(&self) -> &McConfig {
        &self.config
    }

    // ── Single trial ──────────────────────────────────────────────────────

    /// Run one trial: fresh RNG, fresh cabin, one makespan.
    ///
    /// Trials are independent — any `TrialId` can be run in isolation (or
    /// re-run for debugging) and produces the same value it would inside a
    /// batch.
    pub fn run_trial(&self, trial: TrialId) -> TrialResult<f64> {
        self.execute(trial).map(|outcome| outcome.makespan)
    }

    fn execute(&self, trial: TrialId) -> TrialResult<TrialOutcome> {
        let mut rng = TrialRng::new(self.config.seed, trial);
        let cabin = Cabin::populate(&self.config.cabin, &mut rng)
            .map_err(|source| TrialError::Trial { trial, source })?;
        let report = cabin
            .simulate_evacuation()
            .map_err(|source| TrialError::Trial { trial, source })?;
        Ok(TrialOutcome {
            makespan:   report.makespan,
            passengers: cabin.occupied_count(),
        })
    }

    // ── Batch ─────────────────────────────────────────────────────────────

    /// Run `config.trials` independent trials and return their makespans,
    /// indexed by trial.
    ///
    /// With the `parallel` Cargo feature the batch is fanned out on Rayon's
    /// thread pool (`config.num_threads` workers, or all logical cores);
    /// per-trial seeding makes the result identical to a sequential run.
    /// The first failing trial aborts the batch.
    pub fn run_batch<O: TrialObserver>(&self, observer: &mut O) -> TrialResult<Vec<f64>> {
        let trials = self.config.trials;

        #[cfg(not(feature = "parallel"))]
        let outcomes = {
            let mut outcomes = Vec::with_capacity(trials as usize);
            for i in 0..trials {
                let trial = TrialId(i);
                let outcome = self.execute(trial)?;
                observer.on_trial_end(trial, outcome.makespan, outcome.passengers);
                outcomes.push(outcome);
            }
            outcomes
        };

        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::prelude::*;

            let fan_out = || {
                (0..trials)
                    .into_par_iter()
                    .map(|i| self.execute(TrialId(i)))
                    .collect::<TrialResult<Vec<TrialOutcome>>>()
            };
            let outcomes = match self.config.num_threads {
                Some(n) => rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| TrialError::ThreadPool(e.to_string()))?
                    .install(fan_out),
                None => fan_out(),
            }?;
            for (i, outcome) in outcomes.iter().enumerate() {
                observer.on_trial_end(TrialId(i as u32), outcome.makespan, outcome.passengers);
            }
            outcomes
        };

        observer.on_batch_end(outcomes.len());
        Ok(outcomes.into_iter().map(|o| o.makespan).collect())
    }
}
