//! Scene lighting: sunlight from the origin plus a dim ambient fill.

use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;

use crate::kinematics::SUN_EARTH_DIST;

/// Luminous intensity of the sunlight point source.
const SUNLIGHT_INTENSITY: f32 = 5_000_000.0;

/// Dim fill so the night sides of Earth and Moon stay faintly visible.
const AMBIENT_BRIGHTNESS: f32 = 60.0;

/// Plugin installing the scene lights.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PointLightShadowMap { size: 1024 })
            .add_systems(Startup, spawn_lighting);
    }
}

/// Spawn the sunlight at the origin and set the ambient level.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });

    // Sunlight radiates from the Sun's fixed position, so the Moon can
    // shadow the Earth and vice versa as they line up.
    commands.spawn((
        PointLight {
            intensity: SUNLIGHT_INTENSITY,
            range: 4.0 * SUN_EARTH_DIST as f32,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
