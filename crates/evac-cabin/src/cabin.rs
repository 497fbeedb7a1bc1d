//! The `Cabin` — rows, passenger arena, and boarding line for one trial.

use evac_core::{AgeBand, CabinConfig, PassengerId, RowId, TrialRng};
use evac_passenger::PassengerProfile;

use crate::queue::{self, EvacuationReport, LineEntry};
use crate::{CabinResult, Row};

/// A fully populated cabin.
///
/// Constructed (and populated — occupancy is sampled exactly once) by
/// [`Cabin::populate`]; immutable afterwards.  Geometry, occupancy, and the
/// boarding line are fixed for the cabin's lifetime; the congestion pass
/// reads them and writes its results into a separate [`EvacuationReport`].
///
/// Fields are private to protect those invariants; seat-map and statistics
/// tooling read everything through the accessors.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cabin {
    rows:       Vec<Row>,
    exits:      Vec<RowId>,
    passengers: Vec<PassengerProfile>,
    line:       Vec<LineEntry>,
}

impl Cabin {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build the seating geometry and sample a population into it.
    ///
    /// The first `front_rows` rows get `seats_front` seats at
    /// `front_speed_factor`; the remainder get `seats_economy` seats at 1.0.
    /// Seats are visited in row-major order; each draws
    /// Bernoulli(`occupancy_rate`) for occupancy and — if occupied —
    /// Bernoulli(`proportion_old`) for the age band.  Unoccupied seats get
    /// no passenger and no line entry.
    pub fn populate(config: &CabinConfig, rng: &mut TrialRng) -> CabinResult<Cabin> {
        config.validate()?;

        let mut rows = Vec::with_capacity(config.total_rows as usize);
        for idx in 0..config.total_rows {
            let (seat_count, speed_factor) = if idx < config.front_rows {
                (config.seats_front, config.front_speed_factor)
            } else {
                (config.seats_economy, 1.0)
            };
            rows.push(Row::new(seat_count, RowId(idx), speed_factor, &config.exits)?);
        }

        let mut passengers: Vec<PassengerProfile> = Vec::new();
        let mut line: Vec<LineEntry> = Vec::new();
        for row in &mut rows {
            for seat in &mut row.seats {
                if !rng.gen_bool(config.occupancy_rate) {
                    continue;
                }
                let age = if rng.gen_bool(config.proportion_old) {
                    AgeBand::Old
                } else {
                    AgeBand::Young
                };

                // `order` is the 1-based rank in the boarding line; the
                // matching PassengerId is the 0-based arena index.
                let id = PassengerId(passengers.len() as u32);
                let profile = PassengerProfile::sample(
                    seat.row,
                    seat.speed_factor,
                    seat.exit_row,
                    age,
                    config.emergency_level,
                    id.0 + 1,
                    rng,
                );
                line.push(LineEntry {
                    row:           seat.row,
                    exit_row:      seat.exit_row,
                    baseline_time: profile.baseline_time,
                    passenger:     id,
                });
                seat.occupant = Some(id);
                passengers.push(profile);
            }
        }

        Ok(Cabin {
            rows,
            exits: config.exits.clone(),
            passengers,
            line,
        })
    }

    // ── The congestion pass ───────────────────────────────────────────────

    /// Run the per-exit congestion algorithm and return the report.
    ///
    /// Fails with [`CabinError::EmptyCabin`][crate::CabinError::EmptyCabin]
    /// when occupancy sampling produced no passengers at all, and with
    /// [`CabinError::StarvedExit`][crate::CabinError::StarvedExit] when a
    /// configured exit has an empty queue while others do not.
    pub fn simulate_evacuation(&self) -> CabinResult<EvacuationReport> {
        queue::run_congestion(&self.exits, &self.line, self.passengers.len())
    }

    // ── Read access for downstream tooling ────────────────────────────────

    /// The rows, front of the cabin first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The configured exits, in assignment-priority order.
    pub fn exits(&self) -> &[RowId] {
        &self.exits
    }

    /// All passengers, indexed by `PassengerId`.
    pub fn passengers(&self) -> &[PassengerProfile] {
        &self.passengers
    }

    /// One passenger, or `None` for an out-of-range ID.
    pub fn passenger(&self, id: PassengerId) -> Option<&PassengerProfile> {
        self.passengers.get(id.index())
    }

    /// The boarding line: one entry per occupied seat, row-major order.
    pub fn line(&self) -> &[LineEntry] {
        &self.line
    }

    /// Total seats in the cabin.
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(Row::seat_count).sum()
    }

    /// Occupied seats (= passengers = line length).
    pub fn occupied_count(&self) -> usize {
        self.passengers.len()
    }
}
