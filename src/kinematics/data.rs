//! Body data for the Sun/Earth/Moon model.
//! Distances and radii are display units, not to scale; periods are in
//! simulated days with deliberately rounded values.

use super::orbit::{CircularOrbit, Spin};

/// Sun display radius in render units
pub const SUN_RADIUS: f64 = 10.0;

/// Earth display radius (half the Sun's)
pub const EARTH_RADIUS: f64 = 5.0;

/// Moon display radius (0.3 of Earth's)
pub const MOON_RADIUS: f64 = 1.5;

/// Distance from Sun to Earth (8 Sun radii)
pub const SUN_EARTH_DIST: f64 = 80.0;

/// Distance from Earth to Moon (2 Earth radii)
pub const EARTH_MOON_DIST: f64 = 10.0;

/// Days for one Earth revolution around the Sun
pub const EARTH_REVOLUTION_DAYS: f64 = 365.0;

/// Days for one Moon revolution around Earth
pub const MOON_REVOLUTION_DAYS: f64 = 27.0;

/// Days for one Earth rotation about its axis
pub const EARTH_ROTATION_DAYS: f64 = 1.0;

/// Days for one Moon rotation about its axis
pub const MOON_ROTATION_DAYS: f64 = 27.0;

/// Identifier for the bodies in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Earth,
    Moon,
}

impl BodyId {
    /// All bodies, in spawn order
    pub const ALL: &'static [BodyId] = &[BodyId::Sun, BodyId::Earth, BodyId::Moon];

    /// The body this one orbits around, if any.
    ///
    /// The Moon orbits Earth's current position, not a fixed point, so its
    /// world position is composed through this link.
    pub fn parent(&self) -> Option<BodyId> {
        match self {
            BodyId::Moon => Some(BodyId::Earth),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Earth => "Earth",
            BodyId::Moon => "Moon",
        }
    }
}

/// Static data for one body: geometry, motion, and surface.
#[derive(Clone, Debug)]
pub struct BodyData {
    pub id: BodyId,
    /// Display radius in render units
    pub radius: f64,
    /// Circular orbit around the parent (None for the Sun, fixed at origin)
    pub orbit: Option<CircularOrbit>,
    /// Axial spin (None for the Sun, which is not animated)
    pub spin: Option<Spin>,
    /// Surface texture path relative to the asset root
    pub texture: &'static str,
    /// Whether the body emits its own light (rendered unlit)
    pub luminous: bool,
}

/// Get the model data for a body.
pub fn get_body_data(id: BodyId) -> BodyData {
    match id {
        BodyId::Sun => BodyData {
            id,
            radius: SUN_RADIUS,
            orbit: None, // Sun is at origin
            spin: None,
            texture: "textures/sun.png",
            luminous: true,
        },

        BodyId::Earth => BodyData {
            id,
            radius: EARTH_RADIUS,
            orbit: Some(CircularOrbit {
                radius: SUN_EARTH_DIST,
                period_days: EARTH_REVOLUTION_DAYS,
            }),
            spin: Some(Spin {
                period_days: EARTH_ROTATION_DAYS,
                retrograde: true,
            }),
            texture: "textures/earth.png",
            luminous: false,
        },

        BodyId::Moon => BodyData {
            id,
            radius: MOON_RADIUS,
            orbit: Some(CircularOrbit {
                radius: EARTH_MOON_DIST,
                period_days: MOON_REVOLUTION_DAYS,
            }),
            spin: Some(Spin {
                period_days: MOON_ROTATION_DAYS,
                retrograde: false,
            }),
            texture: "textures/moon.png",
            luminous: false,
        },
    }
}

/// Get data for all bodies, in spawn order.
pub fn all_bodies() -> Vec<BodyData> {
    BodyId::ALL.iter().map(|&id| get_body_data(id)).collect()
}
