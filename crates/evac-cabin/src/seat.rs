//! A single seat.

use evac_core::{PassengerId, RowId};

/// One seat in a row.
///
/// Location attributes are fixed at construction and shared with every other
/// seat in the row.  `occupant` is written at most once, during cabin
/// population, and never reassigned within a trial.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// The row this seat belongs to.
    pub row: RowId,

    /// Speed multiplier inherited from the row.
    pub speed_factor: f64,

    /// Nearest exit, assigned at row construction.
    pub exit_row: RowId,

    /// The passenger sitting here, if occupancy sampling filled the seat.
    /// Indexes the owning cabin's passenger arena.
    pub occupant: Option<PassengerId>,
}

impl Seat {
    /// An empty seat carrying its row's location attributes.
    pub fn new(row: RowId, speed_factor: f64, exit_row: RowId) -> Self {
        Self {
            row,
            speed_factor,
            exit_row,
            occupant: None,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
