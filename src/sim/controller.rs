//! Rolling motion controller
//!
//! Binds to two host hooks:
//! - `on_frame`: once per rendered frame, samples the move input
//! - `on_fixed_step`: once per physics step, integrates velocity, lets the
//!   body integrate position, then rotates the body by the arc length rolled
//!
//! Hosts that run their own position integration can call
//! [`RollingMotionController::apply_velocity`] and
//! [`RollingMotionController::apply_rolling`] around it instead.

use glam::Vec2;

use super::body::PhysicsBody;
use super::input::{ActionMaps, MoveInput};
use super::motion::{integrate_velocity, roll_rotation};
use crate::config::{ControllerConfig, validate_radius};
use crate::debug::{DebugDraw, colors};
use crate::error::ControllerError;

/// Visual extents used once at construction to derive the rolling radius
pub trait VisualBounds {
    /// Full width and height of the visual
    fn size(&self) -> Vec2;
}

/// Axis-aligned bounds of a sprite or mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub size: Vec2,
}

impl VisualBounds for Bounds {
    fn size(&self) -> Vec2 {
        self.size
    }
}

/// Radius of the circle inscribed in the larger extent of `size`
#[inline]
pub fn radius_from_size(size: Vec2) -> f32 {
    size.x.max(size.y) * 0.5
}

/// What happened during one fixed step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedStepReport {
    /// Body velocity after integration
    pub velocity: Vec2,
    /// Distance between the previous and current position
    pub frame_distance: f32,
    /// Rotation applied this step (degrees), if the body rolled
    pub rotation_degrees: Option<f32>,
}

impl FixedStepReport {
    pub fn rolled(&self) -> bool {
        self.rotation_degrees.is_some()
    }
}

/// Construction-time wiring for a controller
pub struct ControllerBuilder {
    config: ControllerConfig,
    input: Option<Box<dyn MoveInput>>,
    input_error: Option<ControllerError>,
    bounds_size: Option<Vec2>,
}

impl ControllerBuilder {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            input: None,
            input_error: None,
            bounds_size: None,
        }
    }

    /// Bind an input source directly
    pub fn input(mut self, input: Box<dyn MoveInput>) -> Self {
        self.input = Some(input);
        self.input_error = None;
        self
    }

    /// Bind the configured map/action from a registry
    pub fn input_from(mut self, maps: &mut ActionMaps) -> Self {
        match maps.take(&self.config.action_map, &self.config.move_action) {
            Ok(input) => {
                log::info!(
                    "Bound move input '{}/{}'",
                    self.config.action_map,
                    self.config.move_action
                );
                self.input = Some(input);
                self.input_error = None;
            }
            Err(err) => self.input_error = Some(err),
        }
        self
    }

    /// Measure visual bounds for radius derivation
    pub fn bounds(mut self, bounds: &dyn VisualBounds) -> Self {
        self.bounds_size = Some(bounds.size());
        self
    }

    /// Validate the configuration, resolve the radius and attach to `body`.
    ///
    /// A missing input source is logged and tolerated: the controller simply
    /// never gets movement intent.
    pub fn build<B: PhysicsBody>(
        self,
        body: B,
    ) -> Result<RollingMotionController<B>, ControllerError> {
        let mut config = self.config;
        config.validate()?;

        if config.radius_from_bounds {
            if let Some(size) = self.bounds_size {
                let derived = radius_from_size(size);
                match validate_radius(derived) {
                    Ok(()) => config.circle_radius = derived,
                    Err(err) => log::warn!(
                        "Ignoring visual bounds {:?} ({}); keeping radius {}",
                        size,
                        err,
                        config.circle_radius
                    ),
                }
            }
        }

        if self.input.is_none() {
            let err = self.input_error.unwrap_or_else(|| {
                ControllerError::missing(format!(
                    "move input '{}/{}'",
                    config.action_map, config.move_action
                ))
            });
            log::error!("{err}; controller will not move");
        }

        let last_position = body.position();
        Ok(RollingMotionController {
            config,
            body,
            input: self.input,
            move_input: Vec2::ZERO,
            last_position,
            total_distance: 0.0,
            active: false,
        })
    }
}

/// A circle that rolls across the plane under directional input
pub struct RollingMotionController<B: PhysicsBody> {
    config: ControllerConfig,
    body: B,
    input: Option<Box<dyn MoveInput>>,
    /// Input sampled on the latest frame
    move_input: Vec2,
    /// Body position at the end of the previous fixed step
    last_position: Vec2,
    /// Sum of rolled distances, never decreases
    total_distance: f32,
    active: bool,
}

impl<B: PhysicsBody> RollingMotionController<B> {
    // === Lifecycle ===

    pub fn on_activate(&mut self) {
        if self.active {
            return;
        }
        if let Some(input) = self.input.as_mut() {
            input.enable();
        }
        self.last_position = self.body.position();
        self.active = true;
        log::debug!("Rolling controller activated at {:?}", self.last_position);
    }

    pub fn on_deactivate(&mut self) {
        if !self.active {
            return;
        }
        if let Some(input) = self.input.as_mut() {
            input.disable();
        }
        self.active = false;
        log::debug!("Rolling controller deactivated");
    }

    /// Sample the move input (once per rendered frame)
    pub fn on_frame(&mut self) {
        if !self.active {
            log::trace!("on_frame while inactive");
            return;
        }
        let Some(input) = self.input.as_mut() else {
            return;
        };
        let value = input.read();
        if value.is_finite() {
            self.move_input = value;
        } else {
            log::warn!("Discarding non-finite move input {:?}", value);
            self.move_input = Vec2::ZERO;
        }
    }

    /// Run one physics step: velocity, body integration, then rolling
    pub fn on_fixed_step(&mut self, dt: f32) -> FixedStepReport {
        if !self.active {
            log::trace!("on_fixed_step while inactive");
            return FixedStepReport::default();
        }
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Skipping fixed step with dt = {dt}");
            return FixedStepReport::default();
        }

        self.apply_velocity(dt);
        self.body.integrate(dt);
        self.apply_rolling()
    }

    /// Move body velocity toward the input target
    pub fn apply_velocity(&mut self, dt: f32) {
        let velocity = integrate_velocity(
            self.body.velocity(),
            self.move_input,
            self.config.move_speed,
            self.config.acceleration,
            self.config.deceleration,
            dt,
        );
        self.body.set_velocity(velocity);
    }

    /// Rotate by the distance travelled since the previous step.
    /// Must run after the body has integrated its position.
    pub fn apply_rolling(&mut self) -> FixedStepReport {
        let current = self.body.position();
        let frame_distance = current.distance(self.last_position);

        let roll = roll_rotation(
            self.last_position,
            current,
            self.move_input,
            self.config.circle_radius,
            self.config.spin_policy,
        );
        if let Some(step) = roll {
            self.body.rotate_degrees(step.rotation_degrees);
            self.total_distance += step.distance;
            log::trace!(
                "Rolled {:.4} units, rotated {:.3} deg",
                step.distance,
                step.rotation_degrees
            );
        }

        self.last_position = current;

        FixedStepReport {
            velocity: self.body.velocity(),
            frame_distance,
            rotation_degrees: roll.map(|step| step.rotation_degrees),
        }
    }

    // === Accessors ===

    pub fn set_move_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            log::warn!("Ignoring non-finite move speed {speed}");
            return;
        }
        self.config.move_speed = speed;
    }

    /// Replace the rolling radius. Rejects non-positive or non-finite values
    /// and keeps the previous radius.
    pub fn set_circle_radius(&mut self, radius: f32) -> Result<(), ControllerError> {
        if let Err(err) = validate_radius(radius) {
            log::error!("{err}; keeping radius {}", self.config.circle_radius);
            return Err(err);
        }
        self.config.circle_radius = radius;
        Ok(())
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity()
    }

    pub fn total_distance_traveled(&self) -> f32 {
        self.total_distance
    }

    pub fn move_speed(&self) -> f32 {
        self.config.move_speed
    }

    pub fn circle_radius(&self) -> f32 {
        self.config.circle_radius
    }

    pub fn last_input(&self) -> Vec2 {
        self.move_input
    }

    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable body access for host-side effects (collisions, teleports)
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Draw the rolling radius around the body
    pub fn draw_debug(&self, sink: &mut dyn DebugDraw) {
        sink.wire_circle(
            self.body.position(),
            self.config.circle_radius,
            colors::GIZMO_YELLOW,
        );
    }
}
