//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::{DVec3, UVec2};
use orrery::viewport::{Pane, PaneRect, ViewportLayout};
use std::f64::consts::TAU;
use std::time::Duration;

use orrery::kinematics::{EARTH_MOON_DIST, SUN_EARTH_DIST};
use orrery::types::{SECONDS_PER_DAY, SIM_SECONDS_PER_REAL_SECOND};

/// Earth's expected position, computed directly from the orbit constants
/// rather than through the kinematics module under test.
pub fn expected_earth_position(days: f64) -> DVec3 {
    let angle = days / 365.0 * TAU;
    DVec3::new(
        SUN_EARTH_DIST * angle.cos(),
        0.0,
        SUN_EARTH_DIST * angle.sin(),
    )
}

/// The Moon's expected position: Earth's position plus the Moon's own
/// circular offset.
pub fn expected_moon_position(days: f64) -> DVec3 {
    let angle = days / 27.0 * TAU;
    expected_earth_position(days)
        + DVec3::new(
            EARTH_MOON_DIST * angle.cos(),
            0.0,
            EARTH_MOON_DIST * angle.sin(),
        )
}

/// Simulated days for an elapsed wall-clock duration at the fixed rate.
pub fn expected_days(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * SIM_SECONDS_PER_REAL_SECOND / SECONDS_PER_DAY
}

/// A window split every test can agree on: 1500x500, three 500px panes.
pub fn test_layout() -> ViewportLayout {
    ViewportLayout::split(UVec2::new(1500, 500)).expect("test window must split")
}

/// Center pixel of a pane, for synthetic cursor positions.
pub fn pane_center(layout: &ViewportLayout, pane: Pane) -> UVec2 {
    let rect: PaneRect = layout.pane(pane);
    rect.position + rect.size / 2
}
