//! Circular orbit and axial spin math.
//!
//! Everything here is a pure function of the simulated day count, so any
//! pose can be recomputed from scratch at any timestamp without history.

use bevy::math::DVec3;
use std::f64::consts::TAU;

/// A circular orbit in the horizontal (XZ) plane around the parent body.
/// Distances in render units, period in simulated days.
#[derive(Clone, Copy, Debug)]
pub struct CircularOrbit {
    /// Orbital radius in render units
    pub radius: f64,
    /// Days for one full revolution
    pub period_days: f64,
}

impl CircularOrbit {
    /// Revolution angle at the given day count, in radians.
    ///
    /// Unwrapped: grows without bound as days grow. The trigonometric
    /// projection below never needs the wrapped value.
    pub fn angle_at(&self, days: f64) -> f64 {
        days / self.period_days * TAU
    }

    /// Position offset from the parent at the given day count.
    ///
    /// At `days = 0` the body sits on the parent's +X axis; the sweep runs
    /// from +X toward +Z.
    pub fn position_at(&self, days: f64) -> DVec3 {
        let angle = self.angle_at(days);
        DVec3::new(self.radius * angle.cos(), 0.0, self.radius * angle.sin())
    }
}

/// Axial spin about the +Y axis.
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    /// Days for one full rotation
    pub period_days: f64,
    /// Negative rotation sense about +Y when set
    pub retrograde: bool,
}

impl Spin {
    /// Signed spin angle at the given day count, in radians, unwrapped.
    pub fn angle_at(&self, days: f64) -> f64 {
        let angle = days / self.period_days * TAU;
        if self.retrograde { -angle } else { angle }
    }

    /// Spin angle wrapped to `[0, TAU)`.
    ///
    /// Large day counts produce huge unwrapped angles; wrapping before the
    /// f32 narrowing at the render boundary keeps the rotation precise.
    pub fn wrapped_angle_at(&self, days: f64) -> f64 {
        self.angle_at(days).rem_euclid(TAU)
    }
}
