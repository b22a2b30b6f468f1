//! Kinematic model computing body poses from the simulated day count.
//!
//! Coordinate frame:
//! - Sun at the origin, orbits in the horizontal (XZ) plane, +Y up.
//! - All model math in f64; narrowing to f32 happens at the render boundary.
//!
//! Poses are pure functions of `days`. There is no integrator and no stored
//! state, so the same timestamp always yields the same scene.

pub mod data;
pub mod orbit;

#[cfg(test)]
mod proptest_kinematics;

pub use data::{
    BodyData, BodyId, EARTH_MOON_DIST, EARTH_RADIUS, MOON_RADIUS, SUN_EARTH_DIST, SUN_RADIUS,
    all_bodies, get_body_data,
};
pub use orbit::{CircularOrbit, Spin};

use bevy::math::DVec3;

/// Full pose of a body at one timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPose {
    /// World position in render units
    pub translation: DVec3,
    /// Spin angle about +Y in radians, wrapped to `[0, TAU)`
    pub spin: f64,
}

/// Compute a body's world position at the given day count.
///
/// Orbits compose hierarchically: the Moon's offset is applied to Earth's
/// position at the same instant, so the Moon rides along as Earth moves.
pub fn position(id: BodyId, days: f64) -> DVec3 {
    let body = data::get_body_data(id);
    match body.orbit {
        None => DVec3::ZERO,
        Some(orbit) => {
            let local = orbit.position_at(days);
            match id.parent() {
                None => local,
                Some(parent) => position(parent, days) + local,
            }
        }
    }
}

/// Compute a body's full pose (position and spin angle) at the given day count.
pub fn pose(id: BodyId, days: f64) -> BodyPose {
    let body = data::get_body_data(id);
    let spin = body
        .spin
        .map(|s| s.wrapped_angle_at(days))
        .unwrap_or_default();
    BodyPose {
        translation: position(id, days),
        spin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sun_sits_at_origin() {
        for days in [0.0, 100.0, 365.0, 9999.0] {
            assert_eq!(position(BodyId::Sun, days), DVec3::ZERO);
        }
    }

    #[test]
    fn initial_configuration_is_collinear() {
        // Day zero lines everything up on the +X axis.
        let earth = position(BodyId::Earth, 0.0);
        let moon = position(BodyId::Moon, 0.0);

        assert_relative_eq!(earth.x, SUN_EARTH_DIST);
        assert_relative_eq!(earth.z, 0.0);
        assert_relative_eq!(moon.x, SUN_EARTH_DIST + EARTH_MOON_DIST);
        assert_relative_eq!(moon.z, 0.0);
    }

    #[test]
    fn earth_keeps_orbital_distance() {
        for days in [0.0, 50.0, 182.5, 365.0, 4000.0] {
            let earth = position(BodyId::Earth, days);
            assert_relative_eq!(earth.length(), SUN_EARTH_DIST, epsilon = 1e-9);
        }
    }

    #[test]
    fn moon_keeps_distance_from_earth() {
        for days in [0.0, 13.5, 27.0, 100.0, 365.0, 12345.0] {
            let earth = position(BodyId::Earth, days);
            let moon = position(BodyId::Moon, days);
            assert_relative_eq!((moon - earth).length(), EARTH_MOON_DIST, epsilon = 1e-9);
        }
    }

    #[test]
    fn earth_returns_after_one_year() {
        let start = position(BodyId::Earth, 0.0);
        let after_year = position(BodyId::Earth, 365.0);
        assert_relative_eq!(start.x, after_year.x, epsilon = 1e-6);
        assert_relative_eq!(start.z, after_year.z, epsilon = 1e-6);
    }

    #[test]
    fn earth_is_opposite_after_half_year() {
        let start = position(BodyId::Earth, 0.0);
        let half = position(BodyId::Earth, 365.0 / 2.0);
        let dot = start.normalize().dot(half.normalize());
        assert_relative_eq!(dot, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn poses_are_reproducible() {
        // No hidden state: asking twice returns bitwise-identical poses.
        for id in [BodyId::Sun, BodyId::Earth, BodyId::Moon] {
            let days = 123.456;
            assert_eq!(pose(id, days), pose(id, days));
        }
    }

    #[test]
    fn sun_pose_has_no_spin() {
        assert_eq!(pose(BodyId::Sun, 42.0).spin, 0.0);
    }

    #[test]
    fn earth_and_moon_spin_in_opposite_senses() {
        // Compare at a fraction of both spin periods so neither has wrapped.
        let days = 0.1;
        let earth = get_body_data(BodyId::Earth).spin.unwrap();
        let moon = get_body_data(BodyId::Moon).spin.unwrap();
        assert!(earth.angle_at(days) < 0.0);
        assert!(moon.angle_at(days) > 0.0);
    }
}
