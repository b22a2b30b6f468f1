//! Window layout carving the application window into three viewport panes.
//!
//! The split is computed in physical pixels. A startup split failure is
//! fatal (reported before any scene exists); a mid-session resize to an
//! unusable size keeps the previous layout instead.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;
use thiserror::Error;

/// The three viewport panes, in left-to-right order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Top-down view centered on the Sun
    Overview,
    /// View from Earth's position toward the Sun
    EarthView,
    /// Freely orbitable view
    FreeOrbit,
}

impl Pane {
    /// All panes, in screen order
    pub const ALL: [Pane; 3] = [Pane::Overview, Pane::EarthView, Pane::FreeOrbit];

    /// Column index of this pane, left to right
    pub fn index(&self) -> usize {
        match self {
            Pane::Overview => 0,
            Pane::EarthView => 1,
            Pane::FreeOrbit => 2,
        }
    }
}

/// Marker linking a camera entity to the pane it renders into.
#[derive(Component, Clone, Copy, Debug)]
pub struct PaneCamera {
    pub pane: Pane,
}

/// A pane's rectangle in physical window pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaneRect {
    /// Top-left corner
    pub position: UVec2,
    /// Extent in pixels
    pub size: UVec2,
}

impl PaneRect {
    /// Whether a physical-pixel position falls inside this rectangle.
    pub fn contains(&self, pos: UVec2) -> bool {
        pos.x >= self.position.x
            && pos.x < self.position.x + self.size.x
            && pos.y >= self.position.y
            && pos.y < self.position.y + self.size.y
    }

    /// The render-target region for a camera bound to this pane.
    pub fn to_viewport(self) -> Viewport {
        Viewport {
            physical_position: self.position,
            physical_size: self.size,
            ..default()
        }
    }
}

/// A pane could not be given any pixels at the requested window size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no drawable surface for the {pane:?} pane in a {width}x{height} px window")]
pub struct MissingSurfaceError {
    /// First pane that would have received an empty rectangle
    pub pane: Pane,
    /// Offending window width in physical pixels
    pub width: u32,
    /// Offending window height in physical pixels
    pub height: u32,
}

/// Resource holding the current three-pane split of the window.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct ViewportLayout {
    panes: [PaneRect; 3],
    window_size: UVec2,
}

impl ViewportLayout {
    /// Split a window into three equal-width panes, left to right.
    ///
    /// Widths that do not divide by three leave their remainder on the
    /// rightmost pane, so the panes always tile the window exactly. Fails
    /// if any pane would end up with zero pixels.
    pub fn split(window_size: UVec2) -> Result<Self, MissingSurfaceError> {
        let base = window_size.x / 3;
        let mut panes = [PaneRect::default(); 3];

        for pane in Pane::ALL {
            let i = pane.index() as u32;
            let width = if pane == Pane::FreeOrbit {
                window_size.x - base * 2
            } else {
                base
            };
            let rect = PaneRect {
                position: UVec2::new(base * i, 0),
                size: UVec2::new(width, window_size.y),
            };
            if rect.size.x == 0 || rect.size.y == 0 {
                return Err(MissingSurfaceError {
                    pane,
                    width: window_size.x,
                    height: window_size.y,
                });
            }
            panes[pane.index()] = rect;
        }

        Ok(Self { panes, window_size })
    }

    /// The rectangle of one pane.
    pub fn pane(&self, pane: Pane) -> PaneRect {
        self.panes[pane.index()]
    }

    /// The pane under a physical-pixel position, if any.
    pub fn pane_at(&self, pos: UVec2) -> Option<Pane> {
        Pane::ALL.into_iter().find(|&pane| self.pane(pane).contains(pos))
    }

    /// The window size this layout was computed for.
    pub fn window_size(&self) -> UVec2 {
        self.window_size
    }
}

/// Plugin keeping the pane layout in step with the window.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, refresh_viewports);
    }
}

/// Re-split the layout when the window's physical size changes.
///
/// An unusable size (for example a minimized window) keeps the previous
/// layout and warns once per offending size; the cameras keep rendering
/// into their last valid rectangles until the window recovers.
fn refresh_viewports(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<ViewportLayout>,
    mut cameras: Query<(&mut Camera, &PaneCamera)>,
    mut rejected: Local<Option<UVec2>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let size = UVec2::new(window.physical_width(), window.physical_height());
    if size == layout.window_size() {
        return;
    }

    match ViewportLayout::split(size) {
        Ok(new_layout) => {
            *layout = new_layout;
            *rejected = None;
            for (mut camera, pane_camera) in &mut cameras {
                camera.viewport = Some(layout.pane(pane_camera.pane).to_viewport());
            }
            info!("Window now {}x{} px, viewports re-split", size.x, size.y);
        }
        Err(err) => {
            if *rejected != Some(size) {
                warn!("{err}; keeping previous layout");
                *rejected = Some(size);
            }
        }
    }
}
