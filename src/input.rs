//! Pointer input routed to the free-orbit camera.
//!
//! Every gesture is hit-tested against the pane layout: only input that
//! begins inside the free-orbit pane drives the controller, so the two
//! synchronized panes stay inert under the pointer.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::input::touch::Touch;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{ORBIT_ZOOM_SPEED, OrbitController};
use crate::types::OrbitControlSet;
use crate::viewport::{Pane, ViewportLayout};

/// Which mouse gesture currently owns the free camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveGesture {
    #[default]
    None,
    /// Left drag: rotate around the target
    Rotate,
    /// Right drag: pan the target
    Pan,
}

/// Resource tracking the in-flight pointer gesture.
///
/// A drag begun inside the free-orbit pane keeps control until the button
/// is released, even when the pointer crosses into another pane mid-drag.
#[derive(Resource, Default)]
pub struct DragState {
    pub gesture: ActiveGesture,
}

/// Plugin reading pointer and touch input into the orbit controller.
pub struct OrbitInputPlugin;

impl Plugin for OrbitInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            // Gather folds input into the controller before Apply writes
            // the camera transform from it
            .configure_sets(
                Update,
                OrbitControlSet::Apply.after(OrbitControlSet::Gather),
            )
            .add_systems(
                Update,
                (mouse_orbit_input, touch_orbit_input).in_set(OrbitControlSet::Gather),
            );
    }
}

/// The pane under the mouse cursor, in physical pixels.
fn cursor_pane(window: &Window, layout: &ViewportLayout) -> Option<Pane> {
    let cursor = window.cursor_position()?;
    let physical = (cursor * window.scale_factor()).as_uvec2();
    layout.pane_at(physical)
}

/// Handle mouse drag (rotate and pan) and scroll wheel (zoom).
fn mouse_orbit_input(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<ViewportLayout>,
    mut drag_state: ResMut<DragState>,
    mut controllers: Query<&mut OrbitController>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let Ok(mut controller) = controllers.get_single_mut() else {
        return;
    };

    let over_free_pane = cursor_pane(window, &layout) == Some(Pane::FreeOrbit);

    if buttons.just_pressed(MouseButton::Left) && over_free_pane {
        drag_state.gesture = ActiveGesture::Rotate;
    }
    if buttons.just_pressed(MouseButton::Right)
        && over_free_pane
        && drag_state.gesture == ActiveGesture::None
    {
        drag_state.gesture = ActiveGesture::Pan;
    }

    match drag_state.gesture {
        ActiveGesture::Rotate if buttons.pressed(MouseButton::Left) => {
            if motion.delta != Vec2::ZERO {
                controller.rotate(motion.delta);
            }
        }
        ActiveGesture::Pan if buttons.pressed(MouseButton::Right) => {
            if motion.delta != Vec2::ZERO {
                controller.pan(motion.delta);
            }
        }
        _ => drag_state.gesture = ActiveGesture::None,
    }

    // Zoom needs no drag, just the wheel turning over the pane
    if scroll.delta.y != 0.0 && over_free_pane {
        controller.zoom(1.0 - scroll.delta.y * ORBIT_ZOOM_SPEED);
    }
}

/// Handle single-finger rotate and two-finger pinch zoom.
fn touch_orbit_input(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<ViewportLayout>,
    mut controllers: Query<&mut OrbitController>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let Ok(mut controller) = controllers.get_single_mut() else {
        return;
    };

    let scale = window.scale_factor();
    let in_free_pane =
        |pos: Vec2| layout.pane_at((pos * scale).as_uvec2()) == Some(Pane::FreeOrbit);

    let active: Vec<&Touch> = touches.iter().collect();
    match active.as_slice() {
        [touch] if in_free_pane(touch.start_position()) => {
            let delta = touch.delta();
            if delta != Vec2::ZERO {
                controller.rotate(delta);
            }
        }
        [a, b] if in_free_pane(a.start_position()) && in_free_pane(b.start_position()) => {
            // Pinch: zoom by the ratio of previous to current finger spread
            let current = a.position().distance(b.position());
            let previous = (a.position() - a.delta()).distance(b.position() - b.delta());
            if current > f32::EPSILON && previous > f32::EPSILON {
                controller.zoom(previous / current);
            }
        }
        _ => {}
    }
}
