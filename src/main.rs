//! Orrery - a three-viewport Sun/Earth/Moon visualization.
//!
//! A desktop application rendering one shared orbital scene through three
//! synchronized viewports: a top-down overview, the view of the Sun from
//! Earth, and a freely orbitable camera.

use bevy::prelude::*;
use bevy::window::WindowResolution;

mod camera;
mod input;
mod kinematics;
mod render;
mod time;
mod types;
mod viewport;

use camera::CameraPlugin;
use input::OrbitInputPlugin;
use render::ScenePlugin;
use time::ClockPlugin;
use viewport::ViewportLayout;

/// Startup window width in pixels (three square-ish panes side by side).
const WINDOW_WIDTH: u32 = 1500;

/// Startup window height in pixels.
const WINDOW_HEIGHT: u32 = 500;

fn main() -> AppExit {
    // Validate the three-pane split before any scene exists. A window too
    // small to give every pane pixels is a fatal configuration error; the
    // layout is re-split against the real physical size once the window
    // reports it.
    let layout = match ViewportLayout::split(UVec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("cannot start: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                resolution: WindowResolution::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
                ..default()
            }),
            ..default()
        }))
        // Insert the layout before the plugins that read it
        .insert_resource(layout)
        // Add simulation plugins
        .add_plugins((
            ClockPlugin,
            viewport::ViewportPlugin,
            ScenePlugin,
            CameraPlugin,
            OrbitInputPlugin,
        ))
        .run()
}
