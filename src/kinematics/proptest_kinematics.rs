//! Property-based tests for the kinematic model using proptest.
//!
//! These verify the geometric invariants of the orbit composition across a
//! wide range of timestamps.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::data::{BodyId, EARTH_MOON_DIST, SUN_EARTH_DIST};
use super::orbit::Spin;
use super::{pose, position};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Earth stays on its orbital circle at every timestamp.
    #[test]
    fn prop_earth_distance_constant(days in 0.0f64..100_000.0) {
        let earth = position(BodyId::Earth, days);
        let error = (earth.length() - SUN_EARTH_DIST).abs();
        prop_assert!(
            error < 1e-8,
            "Earth drifted off its orbit at day {}: |pos| = {}",
            days, earth.length()
        );
    }

    /// The Moon keeps its distance from Earth wherever Earth is.
    ///
    /// This is the hierarchical composition invariant: the Moon's offset is
    /// measured from Earth's current position, so Earth's own motion must
    /// cancel out of the separation.
    #[test]
    fn prop_moon_earth_separation_constant(days in 0.0f64..100_000.0) {
        let earth = position(BodyId::Earth, days);
        let moon = position(BodyId::Moon, days);
        let separation = (moon - earth).length();
        let error = (separation - EARTH_MOON_DIST).abs();
        prop_assert!(
            error < 1e-8,
            "Moon separation broke at day {}: {} (earth at {:?})",
            days, separation, earth
        );
    }

    /// Poses are a pure function of the day count.
    #[test]
    fn prop_poses_are_pure(days in 0.0f64..100_000.0) {
        for id in [BodyId::Sun, BodyId::Earth, BodyId::Moon] {
            prop_assert_eq!(pose(id, days), pose(id, days));
        }
    }

    /// All motion stays in the horizontal plane.
    #[test]
    fn prop_motion_is_planar(days in 0.0f64..100_000.0) {
        for id in [BodyId::Sun, BodyId::Earth, BodyId::Moon] {
            prop_assert_eq!(position(id, days).y, 0.0);
        }
    }

    /// Wrapped spin angles stay in [0, TAU) for arbitrary periods and times.
    #[test]
    fn prop_wrapped_spin_in_range(
        days in 0.0f64..100_000.0,
        period in 0.5f64..400.0,
        retrograde in any::<bool>(),
    ) {
        let spin = Spin { period_days: period, retrograde };
        let angle = spin.wrapped_angle_at(days);
        prop_assert!(
            (0.0..TAU).contains(&angle),
            "wrapped angle {} out of range (period {}, days {})",
            angle, period, days
        );
    }

    /// One revolution period brings a body back to its starting point.
    #[test]
    fn prop_orbits_are_periodic(start_days in 0.0f64..10_000.0) {
        let before = position(BodyId::Earth, start_days);
        let after = position(BodyId::Earth, start_days + 365.0);
        prop_assert!(
            (after - before).length() < 1e-6,
            "Earth did not close its orbit from day {}",
            start_days
        );
    }
}
