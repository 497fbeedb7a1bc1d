//! Batch observer trait for progress reporting.

use evac_core::TrialId;

/// Callbacks invoked by [`TrialRunner::run_batch`][crate::TrialRunner::run_batch].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Sequential batches report each trial
/// as it finishes; parallel batches report after the join, in trial order.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl TrialObserver for ProgressPrinter {
///     fn on_trial_end(&mut self, trial: TrialId, makespan: f64, _passengers: usize) {
///         if trial.0 % self.interval == 0 {
///             println!("{trial}: cabin clear in {makespan:.1}s");
///         }
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once per completed trial with its makespan and the number of
    /// passengers the trial's cabin held.
    fn on_trial_end(&mut self, _trial: TrialId, _makespan: f64, _passengers: usize) {}

    /// Called once after the final trial completes.
    fn on_batch_end(&mut self, _trials: usize) {}
}

/// A [`TrialObserver`] that does nothing.  Use when you need to call
/// `run_batch` but don't want progress callbacks.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
