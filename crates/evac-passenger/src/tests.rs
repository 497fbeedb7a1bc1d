//! Unit tests for the passenger model.

#[cfg(test)]
mod traits {
    use evac_core::{AgeBand, TrialId, TrialRng};

    use crate::PassengerTraits;

    fn rng() -> TrialRng {
        TrialRng::new(42, TrialId(0))
    }

    #[test]
    fn raw_draws_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let t = PassengerTraits::sample(AgeBand::Young, &mut rng);
            assert!((0.0..1.0).contains(&t.panic_level));
            assert!((0.0..1.0).contains(&t.baggage_delay));
            assert!((1.0..=4.0).contains(&t.move_time));
        }
    }

    #[test]
    fn old_passengers_move_slower() {
        let mut rng = rng();
        for _ in 0..500 {
            let t = PassengerTraits::sample(AgeBand::Old, &mut rng);
            assert!((8.0..=10.0).contains(&t.move_time));
        }
    }

    #[test]
    fn scaling_is_monotonic_in_severity() {
        // Fixed draws, two severities: panic weakly rises, baggage and
        // move time weakly fall.
        let raw = PassengerTraits {
            panic_level:   0.4,
            baggage_delay: 0.7,
            move_time:     3.0,
        };
        let lo = raw.scaled(0.2);
        let hi = raw.scaled(0.9);
        assert!(lo.panic_level <= hi.panic_level);
        assert!(lo.baggage_delay >= hi.baggage_delay);
        assert!(lo.move_time >= hi.move_time);
    }

    #[test]
    fn panic_never_exceeds_one() {
        let raw = PassengerTraits {
            panic_level:   0.999_999,
            baggage_delay: 0.5,
            move_time:     2.0,
        };
        // Severity 1.0 leaves panic at its cap, never above.
        assert!(raw.scaled(1.0).panic_level <= 1.0);
    }

    #[test]
    fn scaling_values_exact() {
        let raw = PassengerTraits {
            panic_level:   0.5,
            baggage_delay: 0.8,
            move_time:     4.0,
        };
        let scaled = raw.scaled(0.5);
        assert_eq!(scaled.panic_level, 0.25);
        assert_eq!(scaled.baggage_delay, 0.8 * 0.75);
        assert_eq!(scaled.move_time, 4.0 * 0.9);
    }

    #[test]
    fn zero_severity_is_identity_for_delays() {
        let raw = PassengerTraits {
            panic_level:   0.6,
            baggage_delay: 0.3,
            move_time:     9.0,
        };
        let scaled = raw.scaled(0.0);
        assert_eq!(scaled.baggage_delay, raw.baggage_delay);
        assert_eq!(scaled.move_time, raw.move_time);
        // Panic scales with severity, so zero severity means no panic term.
        assert_eq!(scaled.panic_level, 0.0);
    }
}

#[cfg(test)]
mod profile {
    use evac_core::{AgeBand, RowId, TrialId, TrialRng};

    use crate::{PassengerProfile, PassengerTraits};

    #[test]
    fn baseline_formula_exact() {
        let traits = PassengerTraits {
            panic_level:   0.5,
            baggage_delay: 0.25,
            move_time:     2.0,
        };
        // distance |3 − 8| = 5, so 0.25 + 0.5·2.0·0.8·5 = 4.25
        let p = PassengerProfile::from_traits(traits, AgeBand::Young, RowId(3), 0.8, RowId(8), 1);
        assert_eq!(p.distance_to_exit, 5);
        assert_eq!(p.baseline_time, 4.25);
    }

    #[test]
    fn exit_in_own_row_costs_only_baggage() {
        let mut rng = TrialRng::new(7, TrialId(0));
        for order in 1..=200 {
            let p = PassengerProfile::sample(
                RowId(12), 1.0, RowId(12), AgeBand::Old, 0.4, order, &mut rng,
            );
            assert_eq!(p.distance_to_exit, 0);
            assert_eq!(p.baseline_time, p.baggage_delay);
        }
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let mut r1 = TrialRng::new(99, TrialId(3));
        let mut r2 = TrialRng::new(99, TrialId(3));
        let a = PassengerProfile::sample(RowId(5), 0.8, RowId(0), AgeBand::Young, 0.9, 1, &mut r1);
        let b = PassengerProfile::sample(RowId(5), 0.8, RowId(0), AgeBand::Young, 0.9, 1, &mut r2);
        assert_eq!(a.baseline_time, b.baseline_time);
        assert_eq!(a.panic_level, b.panic_level);
        assert_eq!(a.move_time, b.move_time);
    }

    #[test]
    fn baseline_time_is_finite_and_nonnegative() {
        let mut rng = TrialRng::new(1, TrialId(0));
        for order in 1..=500 {
            let p = PassengerProfile::sample(
                RowId(20), 1.0, RowId(0), AgeBand::Young, 1.0, order, &mut rng,
            );
            assert!(p.baseline_time.is_finite());
            assert!(p.baseline_time >= 0.0);
        }
    }
}
