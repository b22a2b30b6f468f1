//! Scene construction and per-pass transform synchronization.
//!
//! One shared scene feeds all three viewport cameras: the bodies are
//! spawned once at startup and their transforms rewritten from the
//! kinematic model on every accepted simulation pass.

mod bodies;
mod lighting;
mod sync;

use bevy::prelude::*;

use self::bodies::BodyMeshPlugin;
use self::lighting::LightingPlugin;
use crate::types::TickPhase;

pub use self::bodies::CelestialBody;
pub use self::sync::sync_body_poses;

/// Plugin aggregating scene construction and per-pass body updates.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_plugins((BodyMeshPlugin, LightingPlugin))
            .add_systems(Update, sync_body_poses.in_set(TickPhase::Bodies));
    }
}
