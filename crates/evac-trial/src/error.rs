use evac_cabin::CabinError;
use evac_core::{ConfigError, TrialId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single trial failed mid-batch.  The whole batch is aborted — a
    /// short result sequence is never returned.
    #[error("trial {trial} failed: {source}")]
    Trial { trial: TrialId, source: CabinError },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type TrialResult<T> = Result<T, TrialError>;
