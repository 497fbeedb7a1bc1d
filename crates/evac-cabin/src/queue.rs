//! Per-exit congestion queues and the single-file recurrence.
//!
//! # Why a `BTreeMap`
//!
//! Queues are grouped by exit into an ordered map, built fresh for every
//! trial and never reused.  Iteration order over exits must be deterministic
//! — the makespan itself is order-independent, but per-exit completion
//! reporting and tests are not — so a hash map is the wrong tool here.
//!
//! # The recurrence
//!
//! Within one exit's queue (boarding-line order, never re-sorted):
//!
//! ```text
//! final[0] = t[0]
//! final[i] = max(max(final[0..i]), t[i])        for i > 0
//! ```
//!
//! A queue is a strict single-file bottleneck: no passenger can finish
//! before anyone ahead of them.  Because the sequence is nondecreasing, the
//! exit's completion time is simply its last element.

use std::collections::BTreeMap;

use evac_core::{PassengerId, RowId};

use crate::{CabinError, CabinResult};

// ── LineEntry ─────────────────────────────────────────────────────────────────

/// One occupied seat's entry in the boarding line, in row-major traversal
/// order.  The congestion pass consumes these; seat-map tooling reads them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineEntry {
    /// The passenger's row.
    pub row: RowId,
    /// The exit this passenger queues at.
    pub exit_row: RowId,
    /// Congestion-free evacuation time.
    pub baseline_time: f64,
    /// Index into the cabin's passenger arena.
    pub passenger: PassengerId,
}

// ── Single-file recurrence ────────────────────────────────────────────────────

/// Apply the single-file bottleneck to a queue of baseline times.
///
/// Returns the per-passenger final times, in queue order.  The output is
/// nondecreasing; its last element is the queue's completion time.
pub fn single_file_times(baselines: &[f64]) -> Vec<f64> {
    let mut running_max = f64::NEG_INFINITY;
    baselines
        .iter()
        .map(|&t| {
            running_max = running_max.max(t);
            running_max
        })
        .collect()
}

// ── EvacuationReport ──────────────────────────────────────────────────────────

/// The congestion pass's output for one trial.
///
/// Kept separate from [`Cabin`][crate::Cabin] so the populated object graph
/// stays immutable: each passenger's final time is written exactly once,
/// here.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvacuationReport {
    /// Final (congestion-adjusted) time per passenger, indexed by
    /// `PassengerId`.
    pub final_times: Vec<f64>,

    /// Completion time of each exit's queue.
    pub exit_completions: BTreeMap<RowId, f64>,

    /// Total evacuation time: the cabin is clear only once every exit's
    /// queue has drained.
    pub makespan: f64,
}

impl EvacuationReport {
    /// Final time for one passenger, or `None` for an out-of-range ID.
    pub fn final_time(&self, passenger: PassengerId) -> Option<f64> {
        self.final_times.get(passenger.index()).copied()
    }
}

// ── Congestion pass ───────────────────────────────────────────────────────────

/// Group the boarding line by exit and run the recurrence on each queue.
///
/// `passenger_count` sizes the `final_times` array; every line entry's
/// `PassengerId` must index into it (a populated cabin guarantees this).
pub(crate) fn run_congestion(
    exits:           &[RowId],
    line:            &[LineEntry],
    passenger_count: usize,
) -> CabinResult<EvacuationReport> {
    if line.is_empty() {
        return Err(CabinError::EmptyCabin);
    }

    // Pre-seed every configured exit so a starved exit is detected rather
    // than silently absent from the grouping.
    let mut queues: BTreeMap<RowId, Vec<&LineEntry>> =
        exits.iter().map(|&exit| (exit, Vec::new())).collect();
    for entry in line {
        queues.entry(entry.exit_row).or_default().push(entry);
    }
    for (&exit, queue) in &queues {
        if queue.is_empty() {
            return Err(CabinError::StarvedExit { exit });
        }
    }

    let mut final_times = vec![0.0; passenger_count];
    let mut exit_completions = BTreeMap::new();
    for (&exit, queue) in &queues {
        let baselines: Vec<f64> = queue.iter().map(|e| e.baseline_time).collect();
        let finals = single_file_times(&baselines);
        for (entry, &ft) in queue.iter().zip(&finals) {
            final_times[entry.passenger.index()] = ft;
        }
        // Nondecreasing sequence — the completion time is the last element.
        let completion = *finals.last().unwrap_or(&0.0);
        exit_completions.insert(exit, completion);
    }

    // All baseline times are ≥ 0, so folding from zero is safe.
    let makespan = exit_completions.values().copied().fold(0.0, f64::max);

    Ok(EvacuationReport {
        final_times,
        exit_completions,
        makespan,
    })
}
