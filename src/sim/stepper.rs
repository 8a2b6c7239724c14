//! Fixed timestep scheduling
//!
//! Converts variable frame times into whole fixed steps, the same
//! accumulator scheme a host engine uses for its physics callbacks.

use crate::consts::{FIXED_DT, MAX_FRAME_TIME, MAX_SUBSTEPS};

/// Accumulator for fixed-step scheduling
#[derive(Debug, Clone)]
pub struct FixedStepper {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStepper {
    /// A non-positive or non-finite `dt` falls back to [`FIXED_DT`]
    pub fn new(dt: f32) -> Self {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            log::warn!("Invalid fixed step dt = {dt}; using {FIXED_DT}");
            FIXED_DT
        };
        Self {
            dt,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// Add a frame's elapsed time and run `step` once per whole fixed step.
    /// Returns the number of steps run.
    pub fn advance(&mut self, frame_time: f32, mut step: impl FnMut(f32)) -> u32 {
        if !frame_time.is_finite() {
            log::warn!("Skipping frame with frame time = {frame_time}");
            return 0;
        }
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            step(self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }

        // Drop backlog we could not catch up on
        if substeps == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Dropping {:.4}s of fixed-step backlog", self.accumulator);
            self.accumulator %= self.dt;
        }
        substeps
    }
}
