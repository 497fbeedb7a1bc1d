//! Rows of seats and nearest-exit assignment.

use evac_core::{ConfigError, ConfigResult, RowId};

use crate::Seat;

/// Assign the nearest exit to a row.
///
/// Returns the exit minimizing `|exit − row|`.  Ties are broken by the
/// earliest exit in `exits` — input order is part of the contract, so the
/// assignment is deterministic even for symmetric layouts.
pub fn assign_exit(row: RowId, exits: &[RowId]) -> ConfigResult<RowId> {
    let mut best: Option<(RowId, u16)> = None;
    for &exit in exits {
        let d = row.distance(exit);
        // Strict `<` keeps the first minimal exit on a tie.
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((exit, d));
        }
    }
    best.map(|(exit, _)| exit).ok_or(ConfigError::NoExits)
}

/// A fixed-length row of seats.
///
/// Every seat in the row shares the row's speed factor and nearest-exit
/// assignment — the exit is computed once here, not per seat.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// This row's index within the cabin.
    pub index: RowId,

    /// Speed multiplier for every passenger seated here.  < 1.0 is faster.
    pub speed_factor: f64,

    /// Nearest exit for the whole row.
    pub exit_row: RowId,

    /// The seats, in column order.
    pub seats: Vec<Seat>,
}

impl Row {
    /// Construct a row of `seat_count` empty seats.
    pub fn new(
        seat_count:   u8,
        index:        RowId,
        speed_factor: f64,
        exits:        &[RowId],
    ) -> ConfigResult<Self> {
        let exit_row = assign_exit(index, exits)?;
        let seats = (0..seat_count)
            .map(|_| Seat::new(index, speed_factor, exit_row))
            .collect();
        Ok(Self {
            index,
            speed_factor,
            exit_row,
            seats,
        })
    }

    /// Number of seats in this row.
    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}
