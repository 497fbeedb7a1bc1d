use evac_core::{ConfigError, RowId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CabinError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Occupancy sampling produced zero passengers — there is no makespan to
    /// report, and returning 0.0 would be a lie.
    #[error("no seats were occupied, nothing to evacuate")]
    EmptyCabin,

    /// A configured exit ended up with an empty queue while other exits have
    /// passengers (pathological occupancy sampling).
    #[error("exit {exit} has no passengers while the cabin is occupied")]
    StarvedExit { exit: RowId },
}

pub type CabinResult<T> = Result<T, CabinError>;
