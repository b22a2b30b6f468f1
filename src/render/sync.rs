//! Pose synchronization from the kinematic model to rendered transforms.

use bevy::prelude::*;

use crate::kinematics;
use crate::render::bodies::CelestialBody;
use crate::types::SimulationClock;

/// Rewrite every body transform from the kinematic model.
///
/// All model math stays in f64; the narrowing to f32 happens only here,
/// at the render boundary. Spin angles arrive pre-wrapped to one turn so
/// the narrowing never eats precision at large day counts.
pub fn sync_body_poses(
    clock: Res<SimulationClock>,
    mut query: Query<(&mut Transform, &CelestialBody)>,
) {
    for (mut transform, body) in &mut query {
        let pose = kinematics::pose(body.id, clock.days);
        transform.translation = pose.translation.as_vec3();
        transform.rotation = Quat::from_rotation_y(pose.spin as f32);
    }
}
