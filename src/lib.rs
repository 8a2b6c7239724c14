//! Rolling Circle - a circular body that rolls across a 2D plane
//!
//! Core modules:
//! - `sim`: Controller, kinematics, physics body and input seams
//! - `config`: Serializable controller configuration
//! - `debug`: Debug gizmo drawing
//! - `error`: Error types

pub mod config;
pub mod debug;
pub mod error;
pub mod sim;

pub use config::{ControllerConfig, SpinPolicy};
pub use error::ControllerError;
pub use sim::{ControllerBuilder, FixedStepReport, RollingMotionController};

/// Controller constants
pub mod consts {
    /// Fixed physics timestep (50 Hz)
    pub const FIXED_DT: f32 = 0.02;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the stepper will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Input magnitude at or below which there is no movement intent
    pub const INPUT_DEAD_ZONE: f32 = 0.1;
    /// Minimum per-step displacement that counts as rolling
    pub const MIN_ROLL_DISTANCE: f32 = 0.001;

    /// Controller defaults
    pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
    pub const DEFAULT_ACCELERATION: f32 = 10.0;
    pub const DEFAULT_DECELERATION: f32 = 10.0;
    pub const DEFAULT_CIRCLE_RADIUS: f32 = 0.5;

    /// Default input action map and action names
    pub const DEFAULT_ACTION_MAP: &str = "Player";
    pub const DEFAULT_MOVE_ACTION: &str = "Move";
}

/// Sign of `x`, with zero mapping to zero
#[inline]
pub fn sign_or_zero(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
