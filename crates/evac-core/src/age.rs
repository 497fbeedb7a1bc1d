//! Passenger age band shared across the population and geometry crates.

/// Coarse age category controlling a passenger's intrinsic mobility.
///
/// `evac-passenger` maps each band to a per-row move-time sampling range;
/// nothing else in the workspace branches on age.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgeBand {
    /// Able-bodied adult (default demographic).
    #[default]
    Young,
    /// Elderly passenger, modeled as intrinsically slower.
    Old,
}

impl AgeBand {
    /// Human-readable label, useful for seat-map annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeBand::Young => "young",
            AgeBand::Old   => "old",
        }
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
