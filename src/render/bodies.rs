//! Celestial body meshes and materials.
//!
//! Spawns the Sun, Earth and Moon as textured UV spheres at their day-zero
//! poses. Texture loading is asynchronous and best effort: a body renders
//! with its bare material color until its image resolves, and permanently
//! if the image is missing.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use crate::kinematics::{self, BodyId, all_bodies};

/// Longitude/latitude segments of the body sphere meshes.
const SPHERE_SEGMENTS: u32 = 50;

/// Component marking an entity as a renderable celestial body.
#[derive(Component)]
pub struct CelestialBody {
    /// Identifier for this body in the kinematic model.
    pub id: BodyId,
}

/// Plugin spawning the body meshes at startup.
pub struct BodyMeshPlugin;

impl Plugin for BodyMeshPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Spawn one textured sphere per body at its day-zero pose.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    for body in all_bodies() {
        let mesh = meshes.add(
            Sphere::new(body.radius as f32)
                .mesh()
                .uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        );

        let texture = asset_server.load(body.texture);
        let material = materials.add(if body.luminous {
            // The Sun lights itself: unlit so the point light inside it
            // cannot shade its own surface, emissive so it reads as the
            // light source it is.
            StandardMaterial {
                base_color_texture: Some(texture.clone()),
                emissive: LinearRgba::WHITE * 2.0,
                emissive_texture: Some(texture),
                unlit: true,
                ..default()
            }
        } else {
            StandardMaterial {
                base_color_texture: Some(texture),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            }
        });

        let pose = kinematics::pose(body.id, 0.0);
        let mut entity = commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(pose.translation.as_vec3())
                .with_rotation(Quat::from_rotation_y(pose.spin as f32)),
            CelestialBody { id: body.id },
        ));

        // The light sits inside the Sun's mesh; letting that mesh cast
        // shadows would black out the whole scene.
        if body.luminous {
            entity.insert(NotShadowCaster);
        }
    }

    info!("Spawned {} celestial bodies", BodyId::ALL.len());
}
