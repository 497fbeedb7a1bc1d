//! Simulation configuration types.
//!
//! # Design
//!
//! Configuration is plain data: the application crate builds (or
//! deserializes, with the `serde` feature) a [`McConfig`], calls
//! [`McConfig::validate`] once at the boundary, and hands it to the trial
//! runner.  Validation is explicit rather than clamping — a probability of
//! 1.3 is a caller bug, not a value to quietly repair.

use crate::{ConfigError, ConfigResult, RowId};

// ── CabinConfig ───────────────────────────────────────────────────────────────

/// Geometry, demographics, and severity for a single cabin trial.
///
/// Row indices run front-to-back starting at 0.  The first `front_rows` rows
/// form the "front" section (different seat count and speed factor, e.g. a
/// wider business-class aisle); the remainder are economy rows at factor 1.0.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinConfig {
    /// Total number of seating rows.  Must be > 0.
    pub total_rows: u16,

    /// Rows in the front section.  May be 0 (no front section); must not
    /// exceed `total_rows`.
    pub front_rows: u16,

    /// Seats per row in the front section.
    pub seats_front: u8,

    /// Seats per row in the economy section.
    pub seats_economy: u8,

    /// Rows that have an exit.  Order is significant: when two exits are
    /// equidistant from a row, the earlier entry wins the assignment.
    pub exits: Vec<RowId>,

    /// Speed multiplier for front-section rows.  < 1.0 means faster egress.
    pub front_speed_factor: f64,

    /// Probability that an occupied seat holds an elderly passenger.
    pub proportion_old: f64,

    /// Probability that any given seat is occupied.
    pub occupancy_rate: f64,

    /// Emergency severity in [0, 1] — scales panic up and baggage/mobility
    /// delays down.
    pub emergency_level: f64,
}

impl CabinConfig {
    /// Check every geometric and probabilistic parameter.
    ///
    /// Returns the first violation found; the order of checks is stable so
    /// error messages are predictable in tests.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.total_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.seats_front == 0 || self.seats_economy == 0 {
            return Err(ConfigError::NoSeats);
        }
        if self.front_rows > self.total_rows {
            return Err(ConfigError::FrontExceedsCabin {
                front: self.front_rows,
                total: self.total_rows,
            });
        }
        if self.exits.is_empty() {
            return Err(ConfigError::NoExits);
        }
        let last_row = RowId(self.total_rows - 1);
        for &exit in &self.exits {
            if exit > last_row {
                return Err(ConfigError::ExitOutOfBounds { exit, last_row });
            }
        }
        if !self.front_speed_factor.is_finite() || self.front_speed_factor <= 0.0 {
            return Err(ConfigError::BadSpeedFactor(self.front_speed_factor));
        }
        for (name, value) in [
            ("proportion_old", self.proportion_old),
            ("occupancy_rate", self.occupancy_rate),
            ("emergency_level", self.emergency_level),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Total seats across both sections.
    pub fn seat_count(&self) -> usize {
        let economy_rows = self.total_rows - self.front_rows;
        self.front_rows as usize * self.seats_front as usize
            + economy_rows as usize * self.seats_economy as usize
    }
}

// ── McConfig ──────────────────────────────────────────────────────────────────

/// Top-level Monte Carlo batch configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the trial runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McConfig {
    /// The cabin sampled afresh by every trial.
    pub cabin: CabinConfig,

    /// Number of independent trials to run.  Must be > 0.
    pub trials: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature on `evac-trial`.
    pub num_threads: Option<usize>,
}

impl McConfig {
    /// Validate the batch size and the embedded cabin configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        self.cabin.validate()
    }
}
