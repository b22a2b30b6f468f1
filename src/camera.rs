//! Camera rigs for the three viewport panes.
//!
//! The overview and earth-view cameras are re-aimed from the kinematic
//! model on every simulation pass. The free camera is a pure consumer of
//! its orbit controller, which pointer input mutates every frame.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::kinematics::{self, BodyId, SUN_EARTH_DIST};
use crate::types::{OrbitControlSet, SimulationClock, TickPhase};
use crate::viewport::{Pane, PaneCamera, ViewportLayout};

/// Vertical field of view shared by all three cameras (45 degrees).
pub const CAMERA_FOV: f32 = FRAC_PI_4;

/// Near clip plane in render units.
pub const CAMERA_NEAR: f32 = 1.0;

/// Far clip plane: past the far edge of Earth's orbit as seen from the
/// default vantage points.
pub const CAMERA_FAR: f32 = 6.0 * SUN_EARTH_DIST as f32;

/// Overview camera height above the Sun.
pub const OVERVIEW_ELEVATION: f32 = 3.0 * SUN_EARTH_DIST as f32;

/// Starting distance of the free camera from the origin.
pub const INITIAL_ORBIT_DISTANCE: f32 = 3.0 * SUN_EARTH_DIST as f32;

/// Closest the free camera can approach its target.
pub const MIN_ORBIT_DISTANCE: f32 = 15.0;

/// Furthest the free camera can retreat from its target.
pub const MAX_ORBIT_DISTANCE: f32 = 450.0;

/// Rotation speed in radians per pixel of drag.
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;

/// Zoom speed multiplier for scroll wheel.
pub const ORBIT_ZOOM_SPEED: f32 = 0.1;

/// Pan speed as a fraction of orbit distance per pixel of drag.
pub const ORBIT_PAN_SPEED: f32 = 0.002;

/// Pitch limit keeping the free camera short of the poles.
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;

/// Marker for the top-down overview camera.
#[derive(Component)]
pub struct OverviewCamera;

/// Marker for the camera riding Earth.
#[derive(Component)]
pub struct EarthViewCamera;

/// Orbit state for the free camera: a spherical pose around a target point.
///
/// The camera transform is derived from this on demand; nothing else writes
/// the free camera's transform.
#[derive(Component, Clone, Debug)]
pub struct OrbitController {
    /// Point the camera looks at
    pub target: Vec3,
    /// Azimuth around +Y in radians
    pub yaw: f32,
    /// Elevation in radians, positive above the orbital plane
    pub pitch: f32,
    /// Distance from the target in render units
    pub distance: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: INITIAL_ORBIT_DISTANCE,
        }
    }
}

impl OrbitController {
    /// Fold a drag delta (screen pixels) into yaw and pitch.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_ROTATE_SPEED;
        self.pitch = (self.pitch - delta.y * ORBIT_ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Scale the orbit distance by a factor, clamped to the zoom range.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    }

    /// Translate the target in the camera plane, scaled by distance so a
    /// pixel of drag covers more ground the further out the camera sits.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.orientation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.distance * ORBIT_PAN_SPEED;
        self.target += (up * delta.y - right * delta.x) * scale;
    }

    fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0)
    }

    /// The camera transform this controller describes.
    pub fn transform(&self) -> Transform {
        let eye = self.target + self.orientation() * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(eye).looking_at(self.target, Vec3::Y)
    }
}

/// Plugin spawning the three pane cameras and keeping them aimed.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_cameras)
            .add_systems(
                Update,
                (aim_overview_camera, aim_earth_view_camera).in_set(TickPhase::Cameras),
            )
            .add_systems(
                Update,
                apply_orbit_controller.in_set(OrbitControlSet::Apply),
            );
    }
}

/// Spawn one camera per pane, each rendering into its own viewport rect.
///
/// Render order follows pane order so the viewports are drawn left to
/// right; the clear color only applies to the first.
fn spawn_cameras(mut commands: Commands, layout: Res<ViewportLayout>) {
    let projection = Projection::from(PerspectiveProjection {
        fov: CAMERA_FOV,
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    });

    let initial =
        Transform::from_xyz(0.0, 0.0, INITIAL_ORBIT_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y);

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: Pane::Overview.index() as isize,
            viewport: Some(layout.pane(Pane::Overview).to_viewport()),
            ..default()
        },
        projection.clone(),
        initial,
        PaneCamera {
            pane: Pane::Overview,
        },
        OverviewCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: Pane::EarthView.index() as isize,
            viewport: Some(layout.pane(Pane::EarthView).to_viewport()),
            ..default()
        },
        projection.clone(),
        initial,
        PaneCamera {
            pane: Pane::EarthView,
        },
        EarthViewCamera,
    ));

    let controller = OrbitController::default();
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: Pane::FreeOrbit.index() as isize,
            viewport: Some(layout.pane(Pane::FreeOrbit).to_viewport()),
            ..default()
        },
        projection,
        controller.transform(),
        PaneCamera {
            pane: Pane::FreeOrbit,
        },
        controller,
    ));

    info!("Spawned cameras for {} panes", Pane::ALL.len());
}

/// Hold the overview camera directly above the Sun, looking straight down.
///
/// The up hint is +Z: with the view axis parallel to +Y an up hint of +Y
/// would be degenerate.
pub fn aim_overview_camera(
    clock: Res<SimulationClock>,
    mut query: Query<&mut Transform, With<OverviewCamera>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let sun = kinematics::position(BodyId::Sun, clock.days).as_vec3();
    *transform =
        Transform::from_translation(sun + Vec3::Y * OVERVIEW_ELEVATION).looking_at(sun, Vec3::Z);
}

/// Colocate the earth-view camera with Earth, looking at the Sun.
///
/// Uses the same pose math and the same f64 to f32 narrowing as the body
/// sync, so the camera sits exactly on the Earth entity's translation.
pub fn aim_earth_view_camera(
    clock: Res<SimulationClock>,
    mut query: Query<&mut Transform, With<EarthViewCamera>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let earth = kinematics::position(BodyId::Earth, clock.days).as_vec3();
    let sun = kinematics::position(BodyId::Sun, clock.days).as_vec3();
    *transform = Transform::from_translation(earth).looking_at(sun, Vec3::Y);
}

/// Write the controller pose to the free camera whenever it changed.
///
/// Runs every frame, outside the pass gate, so the interactive pane never
/// lags behind the pointer.
pub fn apply_orbit_controller(
    mut query: Query<(&OrbitController, &mut Transform), Changed<OrbitController>>,
) {
    for (controller, mut transform) in &mut query {
        *transform = controller.transform();
    }
}
