//! Core time types and driver state for the orbital visualization.

use bevy::prelude::*;
use std::time::Duration;

/// System set for the throttled simulation pass.
///
/// The pass-rate condition is attached to this set once, so skipping a pass
/// skips the whole clock/bodies/cameras chain together.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickSet;

/// Ordering of the phases inside one accepted pass.
///
/// The clock must settle before body poses are written, and body poses
/// before the tracking cameras re-aim at them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickPhase {
    /// Recompute simulated days from elapsed wall time
    Clock,
    /// Write body transforms from the kinematic model
    Bodies,
    /// Re-aim the overview and earth-view cameras
    Cameras,
}

/// System set for ordering free-camera input systems.
///
/// Pointer state must be gathered and folded into the controller before the
/// controller is applied to the camera transform.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrbitControlSet {
    /// Read pointer/touch input into the orbit controller (runs first)
    Gather,
    /// Write the controller pose to the camera transform (runs after)
    Apply,
}

/// Seconds per simulated day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Simulated seconds advanced per real second (3 hours per second)
pub const SIM_SECONDS_PER_REAL_SECOND: f64 = 3.0 * 3600.0;

/// Minimum wall-clock interval between accepted simulation passes
pub const MIN_PASS_INTERVAL: Duration = Duration::from_millis(10);

/// Simulation clock resource holding the current simulated day count.
///
/// `days` is recomputed from the total elapsed wall time on every accepted
/// pass rather than accumulated per-frame, so skipped passes never desync
/// simulated time from the wall clock.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated seconds per real second
    pub rate: f64,
    /// Simulated days since startup
    pub days: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            rate: SIM_SECONDS_PER_REAL_SECOND,
            days: 0.0,
        }
    }
}

impl SimulationClock {
    /// Simulated days corresponding to an elapsed wall-clock duration.
    ///
    /// Pure with respect to `elapsed`; calling it twice with the same
    /// duration yields the same day count.
    pub fn days_for(&self, elapsed: Duration) -> f64 {
        elapsed.as_secs_f64() * self.rate / SECONDS_PER_DAY
    }
}

/// Driver state for the minimum-interval pass throttle.
///
/// Owns everything the rate limit needs: the interval, the wall-clock
/// instant of the last accepted pass, and this frame's verdict. The
/// verdict is stored so the run condition gating [`TickSet`] can stay a
/// read-only system.
#[derive(Resource, Clone, Debug)]
pub struct FrameThrottle {
    /// Minimum wall-clock time between accepted passes
    pub min_interval: Duration,
    /// Elapsed-time stamp of the last accepted pass, if any
    last_accepted: Option<Duration>,
    /// Whether the current frame runs a pass
    due: bool,
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self {
            min_interval: MIN_PASS_INTERVAL,
            last_accepted: None,
            due: false,
        }
    }
}

impl FrameThrottle {
    /// Create a throttle with a custom minimum interval.
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            ..Self::default()
        }
    }

    /// Decide whether a pass at elapsed time `now` runs, recording it if so.
    ///
    /// The first pass is always accepted; afterwards a pass runs only when
    /// at least `min_interval` has elapsed since the last accepted one.
    /// The verdict is kept until the next call, for [`Self::is_due`].
    pub fn accept(&mut self, now: Duration) -> bool {
        self.due = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.min_interval,
        };
        if self.due {
            self.last_accepted = Some(now);
        }
        self.due
    }

    /// Whether the most recent [`Self::accept`] admitted a pass.
    pub fn is_due(&self) -> bool {
        self.due
    }

    /// Elapsed-time stamp of the last accepted pass.
    pub fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }
}
