//! Rolling simulation module
//!
//! Everything that runs inside the host's frame and fixed-step callbacks:
//! - Fixed timestep only for velocity and rotation
//! - Host physics and input reached through traits
//! - No rendering or platform dependencies

pub mod body;
pub mod controller;
pub mod input;
pub mod motion;
pub mod stepper;

pub use body::{KinematicBody, PhysicsBody};
pub use controller::{
    Bounds, ControllerBuilder, FixedStepReport, RollingMotionController, VisualBounds,
    radius_from_size,
};
pub use input::{ActionMaps, FixedInput, MoveInput, ScriptedInput, SharedInput, WanderInput};
pub use motion::{RollStep, has_intent, integrate_velocity, roll_angle_degrees, roll_rotation};
pub use stepper::FixedStepper;
