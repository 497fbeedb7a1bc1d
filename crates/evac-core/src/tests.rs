//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PassengerId, RowId, TrialId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(RowId(100) > RowId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PassengerId::INVALID.0, u32::MAX);
        assert_eq!(RowId::INVALID.0, u16::MAX);
        assert_eq!(TrialId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(RowId(7).to_string(), "RowId(7)");
    }

    #[test]
    fn row_distance_is_symmetric() {
        assert_eq!(RowId(3).distance(RowId(10)), 7);
        assert_eq!(RowId(10).distance(RowId(3)), 7);
        assert_eq!(RowId(5).distance(RowId(5)), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{TrialId, TrialRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrialRng::new(12345, TrialId(0));
        let mut r2 = TrialRng::new(12345, TrialId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_trials_differ() {
        let mut r0 = TrialRng::new(1, TrialId(0));
        let mut r1 = TrialRng::new(1, TrialId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent trials should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = TrialRng::new(0, TrialId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TrialRng::new(0, TrialId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod age {
    use crate::AgeBand;

    #[test]
    fn display() {
        assert_eq!(AgeBand::Young.to_string(), "young");
        assert_eq!(AgeBand::Old.to_string(), "old");
    }
}

#[cfg(test)]
mod config {
    use crate::{CabinConfig, ConfigError, McConfig, RowId};

    fn valid_cabin() -> CabinConfig {
        CabinConfig {
            total_rows:         30,
            front_rows:         3,
            seats_front:        2,
            seats_economy:      6,
            exits:              vec![RowId(0), RowId(15), RowId(29)],
            front_speed_factor: 0.8,
            proportion_old:     0.3,
            occupancy_rate:     0.8,
            emergency_level:    0.9,
        }
    }

    #[test]
    fn valid_config_passes() {
        valid_cabin().validate().unwrap();
    }

    #[test]
    fn zero_rows_rejected() {
        let mut cfg = valid_cabin();
        cfg.total_rows = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::NoRows)));
    }

    #[test]
    fn zero_seats_rejected() {
        let mut cfg = valid_cabin();
        cfg.seats_economy = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::NoSeats)));
    }

    #[test]
    fn empty_exits_rejected() {
        let mut cfg = valid_cabin();
        cfg.exits.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoExits)));
    }

    #[test]
    fn exit_past_last_row_rejected() {
        let mut cfg = valid_cabin();
        cfg.exits.push(RowId(30)); // rows are 0..=29
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ExitOutOfBounds { exit: RowId(30), .. })
        ));
    }

    #[test]
    fn oversized_front_section_rejected() {
        let mut cfg = valid_cabin();
        cfg.front_rows = 31;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FrontExceedsCabin { front: 31, total: 30 })
        ));
    }

    #[test]
    fn out_of_range_probabilities_rejected() {
        for field in ["proportion_old", "occupancy_rate", "emergency_level"] {
            let mut cfg = valid_cabin();
            match field {
                "proportion_old"  => cfg.proportion_old = 1.5,
                "occupancy_rate"  => cfg.occupancy_rate = -0.1,
                "emergency_level" => cfg.emergency_level = 2.0,
                _ => unreachable!(),
            }
            assert!(
                matches!(
                    cfg.validate(),
                    Err(ConfigError::ProbabilityOutOfRange { name, .. }) if name == field
                ),
                "{field} should be range-checked"
            );
        }
    }

    #[test]
    fn bad_speed_factor_rejected() {
        let mut cfg = valid_cabin();
        cfg.front_speed_factor = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::BadSpeedFactor(_))));
        cfg.front_speed_factor = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::BadSpeedFactor(_))));
    }

    #[test]
    fn seat_count_sums_both_sections() {
        // 3 front rows × 2 seats + 27 economy rows × 6 seats
        assert_eq!(valid_cabin().seat_count(), 3 * 2 + 27 * 6);
    }

    #[test]
    fn zero_trials_rejected() {
        let cfg = McConfig {
            cabin:       valid_cabin(),
            trials:      0,
            seed:        42,
            num_threads: None,
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoTrials)));
    }

    #[test]
    fn mc_config_delegates_to_cabin() {
        let mut cfg = McConfig {
            cabin:       valid_cabin(),
            trials:      100,
            seed:        42,
            num_threads: None,
        };
        cfg.validate().unwrap();
        cfg.cabin.exits.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoExits)));
    }
}
