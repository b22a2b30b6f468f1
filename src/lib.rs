//! Orrery - a three-viewport Sun/Earth/Moon visualization.
//!
//! A library crate exposing the simulation, camera and layout components
//! for testing and integration purposes.

pub mod camera;
pub mod input;
pub mod kinematics;
pub mod render;
pub mod time;
pub mod types;
pub mod viewport;
