//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `From` impls.  All configuration problems are fail-fast and
//! non-retriable: nothing in the workspace clamps or silently repairs an
//! out-of-range parameter.

use thiserror::Error;

use crate::RowId;

/// A rejected simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cabin must have at least one row")]
    NoRows,

    #[error("rows must have at least one seat")]
    NoSeats,

    #[error("at least one exit is required")]
    NoExits,

    #[error("exit {exit} is beyond the last row {last_row}")]
    ExitOutOfBounds { exit: RowId, last_row: RowId },

    #[error("front section ({front} rows) does not fit in a {total}-row cabin")]
    FrontExceedsCabin { front: u16, total: u16 },

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("front speed factor must be finite and positive, got {0}")]
    BadSpeedFactor(f64),

    #[error("at least one trial is required")]
    NoTrials,
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
