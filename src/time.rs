//! Simulation clock advancement and the minimum-interval pass gate.
//!
//! The clock maps elapsed wall time to simulated days; the gate decides
//! whether this frame runs a simulation pass at all.

use bevy::prelude::*;

use crate::types::{FrameThrottle, SimulationClock, TickPhase, TickSet};

/// Plugin owning the simulation clock and the pass throttle.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<FrameThrottle>()
            // The verdict is computed once, ahead of Update, because the
            // run condition below must stay read-only.
            .add_systems(PreUpdate, gate_pass)
            // The gate sits on the parent set only, so a rejected frame
            // skips the whole clock/bodies/cameras chain together.
            .configure_sets(Update, TickSet.run_if(pass_accepted))
            .configure_sets(
                Update,
                (TickPhase::Clock, TickPhase::Bodies, TickPhase::Cameras)
                    .chain()
                    .in_set(TickSet),
            )
            .add_systems(Update, advance_clock.in_set(TickPhase::Clock));
    }
}

/// Ask the throttle for this frame's verdict, recording an accepted pass.
fn gate_pass(mut throttle: ResMut<FrameThrottle>, time: Res<Time<Real>>) {
    throttle.accept(time.elapsed());
}

/// Run condition admitting at most one simulation pass per throttle window.
///
/// Reads the verdict [`gate_pass`] stored for this frame.
pub fn pass_accepted(throttle: Res<FrameThrottle>) -> bool {
    throttle.is_due()
}

/// Recompute the simulated day count from total elapsed wall time.
///
/// Derived from the absolute elapsed duration, not accumulated per pass, so
/// frames skipped by the gate cost no simulated time.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time<Real>>) {
    clock.days = clock.days_for(time.elapsed());
}
