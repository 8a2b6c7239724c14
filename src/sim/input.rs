//! Directional input sources
//!
//! The controller only needs "read the current 2D move vector". Everything
//! else here is wiring: a named action registry and a few stock providers.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::ControllerError;

/// A source of 2D directional input
///
/// Axes are conventionally in [-1, 1]; the magnitude is not normalized, so
/// diagonals from two independent axes can exceed 1.
pub trait MoveInput {
    fn read(&mut self) -> Vec2;

    /// Called when the owning controller activates
    fn enable(&mut self) {}

    /// Called when the owning controller deactivates
    fn disable(&mut self) {}
}

/// Constant input
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput(pub Vec2);

impl MoveInput for FixedInput {
    fn read(&mut self) -> Vec2 {
        self.0
    }
}

/// Input whose value is set from outside through a cloned handle
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    value: Rc<Cell<Vec2>>,
    enabled: Rc<Cell<bool>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: Vec2) {
        self.value.set(value);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl MoveInput for SharedInput {
    fn read(&mut self) -> Vec2 {
        self.value.get()
    }

    fn enable(&mut self) {
        self.enabled.set(true);
    }

    fn disable(&mut self) {
        self.enabled.set(false);
    }
}

/// Replays a fixed sequence, one value per read, then holds the last value
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<Vec2>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec2>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl MoveInput for ScriptedInput {
    fn read(&mut self) -> Vec2 {
        let Some(&last) = self.frames.last() else {
            return Vec2::ZERO;
        };
        let value = self.frames.get(self.cursor).copied().unwrap_or(last);
        self.cursor = (self.cursor + 1).min(self.frames.len());
        value
    }
}

/// Seeded random walk on the unit square, for demos and soak runs
#[derive(Debug, Clone)]
pub struct WanderInput {
    rng: Pcg32,
    current: Vec2,
    /// Maximum per-read change on each axis
    jitter: f32,
}

impl WanderInput {
    /// A non-finite `jitter` is treated as zero (input stays at rest)
    pub fn new(seed: u64, jitter: f32) -> Self {
        let jitter = if jitter.is_finite() {
            jitter.abs()
        } else {
            log::warn!("Ignoring non-finite wander jitter {jitter}");
            0.0
        };
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: Vec2::ZERO,
            jitter,
        }
    }
}

impl MoveInput for WanderInput {
    fn read(&mut self) -> Vec2 {
        if self.jitter > 0.0 {
            let dx = self.rng.random_range(-self.jitter..=self.jitter);
            let dy = self.rng.random_range(-self.jitter..=self.jitter);
            self.current = (self.current + Vec2::new(dx, dy)).clamp(Vec2::NEG_ONE, Vec2::ONE);
        }
        self.current
    }
}

/// Named action maps, each holding named move actions
#[derive(Default)]
pub struct ActionMaps {
    maps: HashMap<String, HashMap<String, Box<dyn MoveInput>>>,
}

impl ActionMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action, creating its map if needed
    pub fn insert(
        &mut self,
        map: impl Into<String>,
        action: impl Into<String>,
        input: Box<dyn MoveInput>,
    ) {
        self.maps
            .entry(map.into())
            .or_default()
            .insert(action.into(), input);
    }

    /// Remove and return an action for binding to a controller
    pub fn take(
        &mut self,
        map: &str,
        action: &str,
    ) -> Result<Box<dyn MoveInput>, ControllerError> {
        let actions = self
            .maps
            .get_mut(map)
            .ok_or_else(|| ControllerError::missing(format!("action map '{map}'")))?;
        actions
            .remove(action)
            .ok_or_else(|| ControllerError::missing(format!("action '{action}' in map '{map}'")))
    }
}
