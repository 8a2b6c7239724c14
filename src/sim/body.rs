//! Physics body seam
//!
//! The controller never owns position integration. It writes velocity, asks
//! the body to integrate, and reads the resulting position back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::wrap_degrees;

/// A 2D rigid body driven by a host physics engine
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Orientation about the out-of-plane axis (degrees)
    fn rotation_degrees(&self) -> f32;
    /// Rotate about the out-of-plane axis by `delta` degrees
    fn rotate_degrees(&mut self, delta: f32);
    /// Advance position from velocity over one fixed step
    fn integrate(&mut self, dt: f32);
}

/// Simple explicit-Euler body with no forces or collisions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in degrees, kept in [0, 360)
    pub rotation: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Displace the body without touching velocity (collision pushes, teleports)
    pub fn nudge(&mut self, offset: Vec2) {
        self.pos += offset;
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.vel = velocity;
    }

    fn rotation_degrees(&self) -> f32 {
        self.rotation
    }

    fn rotate_degrees(&mut self, delta: f32) {
        self.rotation = wrap_degrees(self.rotation + delta);
    }

    fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut body = KinematicBody::new(Vec2::new(1.0, 1.0));
        body.set_velocity(Vec2::new(2.0, -1.0));
        body.integrate(0.5);
        assert!((body.position() - Vec2::new(2.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut body = KinematicBody::default();
        body.rotate_degrees(-36.0);
        assert!((body.rotation_degrees() - 324.0).abs() < 1e-4);
        body.rotate_degrees(72.0);
        assert!((body.rotation_degrees() - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_nudge_keeps_velocity() {
        let mut body = KinematicBody::default();
        body.set_velocity(Vec2::X);
        body.nudge(Vec2::new(0.0, 3.0));
        assert_eq!(body.velocity(), Vec2::X);
        assert_eq!(body.position(), Vec2::new(0.0, 3.0));
    }
}
