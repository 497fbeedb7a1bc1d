//! Passenger traits, emergency scaling, and the baseline-time formula.

use evac_core::{AgeBand, RowId, TrialRng};

/// Per-row move-time range for able-bodied passengers, seconds per row.
const MOVE_TIME_YOUNG: std::ops::RangeInclusive<f64> = 1.0..=4.0;

/// Per-row move-time range for elderly passengers, seconds per row.
const MOVE_TIME_OLD: std::ops::RangeInclusive<f64> = 8.0..=10.0;

// ── PassengerTraits ───────────────────────────────────────────────────────────

/// The three stochastic draws behind a passenger, before and after emergency
/// scaling.
///
/// Sampling and scaling are split so the scaling arithmetic can be exercised
/// on fixed draws — the monotonicity of each component under rising severity
/// is part of the model's contract.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerTraits {
    /// Normalized panic factor in [0, 1].
    pub panic_level: f64,
    /// Seconds spent handling carry-on items before moving, in [0, 1].
    pub baggage_delay: f64,
    /// Seconds per row of aisle distance; range depends on the age band.
    pub move_time: f64,
}

impl PassengerTraits {
    /// Draw raw (unscaled) traits for one passenger.
    pub fn sample(age: AgeBand, rng: &mut TrialRng) -> Self {
        let move_time = match age {
            AgeBand::Young => rng.gen_range(MOVE_TIME_YOUNG),
            AgeBand::Old   => rng.gen_range(MOVE_TIME_OLD),
        };
        Self {
            panic_level:   rng.gen_range(0.0..1.0),
            baggage_delay: rng.gen_range(0.0..1.0),
            move_time,
        }
    }

    /// Apply emergency severity to each trait.
    ///
    /// Panic scales up with severity but never past 1; baggage handling is
    /// suppressed (people abandon luggage); urgency makes movement faster.
    pub fn scaled(self, emergency_level: f64) -> Self {
        Self {
            panic_level:   (self.panic_level * emergency_level).min(1.0),
            baggage_delay: self.baggage_delay * (1.0 - 0.5 * emergency_level),
            move_time:     self.move_time * (1.0 - 0.2 * emergency_level),
        }
    }
}

// ── PassengerProfile ──────────────────────────────────────────────────────────

/// One fully initialized passenger, bound to a seat and an exit.
///
/// Immutable after construction.  `PassengerId` for this profile is
/// `order - 1`; the cabin stores profiles in boarding-line order so the two
/// stay in lockstep.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerProfile {
    /// Panic factor after emergency scaling, ≤ 1.
    pub panic_level: f64,
    /// Baggage cost after emergency scaling, seconds.
    pub baggage_delay: f64,
    /// Age band the mobility draw came from.
    pub age: AgeBand,
    /// Seconds per row after emergency scaling.
    pub move_time: f64,
    /// The seat's row.
    pub row: RowId,
    /// Speed multiplier inherited from the row.
    pub row_speed_factor: f64,
    /// Row of the assigned (nearest) exit.
    pub exit_row: RowId,
    /// `|row − exit_row|`.
    pub distance_to_exit: u16,
    /// Congestion-free evacuation time, computed once here.
    pub baseline_time: f64,
    /// 1-based rank in the boarding line.  A stable secondary ordering key
    /// only — the congestion pass never reads it.
    pub order: u32,
}

impl PassengerProfile {
    /// Sample a passenger for the given seat.
    ///
    /// Draws raw traits, applies emergency scaling, and computes the baseline
    /// time.  Pure apart from advancing `rng`.
    pub fn sample(
        row:              RowId,
        row_speed_factor: f64,
        exit_row:         RowId,
        age:              AgeBand,
        emergency_level:  f64,
        order:            u32,
        rng:              &mut TrialRng,
    ) -> Self {
        let traits = PassengerTraits::sample(age, rng).scaled(emergency_level);
        Self::from_traits(traits, age, row, row_speed_factor, exit_row, order)
    }

    /// Build a profile from already-scaled traits.
    ///
    /// This is the deterministic half of construction; tests use it to pin
    /// exact baseline values.
    pub fn from_traits(
        traits:           PassengerTraits,
        age:              AgeBand,
        row:              RowId,
        row_speed_factor: f64,
        exit_row:         RowId,
        order:            u32,
    ) -> Self {
        let distance_to_exit = row.distance(exit_row);
        let baseline_time = traits.baggage_delay
            + traits.panic_level
                * traits.move_time
                * row_speed_factor
                * f64::from(distance_to_exit);
        Self {
            panic_level: traits.panic_level,
            baggage_delay: traits.baggage_delay,
            age,
            move_time: traits.move_time,
            row,
            row_speed_factor,
            exit_row,
            distance_to_exit,
            baseline_time,
            order,
        }
    }
}
