//! Rolling kinematics
//!
//! Pure functions shared by the controller: velocity approach toward a target
//! and arc-length rotation (s = rθ) from a per-step displacement.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::SpinPolicy;
use crate::consts::{INPUT_DEAD_ZONE, MIN_ROLL_DISTANCE};
use crate::sign_or_zero;

/// True if the input carries movement intent (outside the dead-zone)
#[inline]
pub fn has_intent(input: Vec2) -> bool {
    input.length() > INPUT_DEAD_ZONE
}

/// Move `velocity` toward `input * move_speed`, changing it by at most
/// `rate * dt` where rate is `acceleration` with intent and `deceleration`
/// without.
pub fn integrate_velocity(
    velocity: Vec2,
    input: Vec2,
    move_speed: f32,
    acceleration: f32,
    deceleration: f32,
    dt: f32,
) -> Vec2 {
    let target = input * move_speed;
    let rate = if has_intent(input) {
        acceleration
    } else {
        deceleration
    };
    let max_change = (rate * dt).max(0.0);
    velocity + (target - velocity).clamp_length_max(max_change)
}

/// One step of rolling, derived from displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollStep {
    /// Distance covered this step
    pub distance: f32,
    /// Signed rotation to apply about the out-of-plane axis (degrees)
    pub rotation_degrees: f32,
}

/// Rotation in degrees for rolling `distance` on a circle of `radius`
#[inline]
pub fn roll_angle_degrees(distance: f32, radius: f32) -> f32 {
    let circumference = TAU * radius;
    (distance / circumference) * 360.0
}

/// Spin sign for a unit travel direction
pub fn spin_sign(direction: Vec2, policy: SpinPolicy) -> f32 {
    match policy {
        SpinPolicy::Horizontal => sign_or_zero(direction.x),
        SpinPolicy::DominantAxis => {
            if direction.x.abs() >= direction.y.abs() {
                sign_or_zero(direction.x)
            } else {
                sign_or_zero(direction.y)
            }
        }
    }
}

/// Rolling produced by moving from `previous` to `current`.
///
/// Returns `None` when the displacement is too small or there is no input
/// intent; residual drift without intent never spins the circle.
pub fn roll_rotation(
    previous: Vec2,
    current: Vec2,
    input: Vec2,
    radius: f32,
    policy: SpinPolicy,
) -> Option<RollStep> {
    let delta = current - previous;
    let distance = delta.length();
    if distance <= MIN_ROLL_DISTANCE || !has_intent(input) {
        return None;
    }

    let direction = delta.normalize_or_zero();
    let angle = roll_angle_degrees(distance, radius);
    // Moving right spins clockwise
    let rotation_degrees = -angle * spin_sign(direction, policy);

    Some(RollStep {
        distance,
        rotation_degrees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const DT: f32 = 0.02;

    #[test]
    fn test_accelerates_from_rest() {
        let mut v = Vec2::ZERO;
        for _ in 0..10 {
            v = integrate_velocity(v, Vec2::X, 5.0, 10.0, 10.0, DT);
        }
        assert!((v - Vec2::new(2.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_reaches_target_without_overshoot() {
        let v = integrate_velocity(Vec2::new(4.9, 0.0), Vec2::X, 5.0, 10.0, 10.0, DT);
        assert!((v.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_dead_zone_decelerates() {
        // 0.05 input would target (0.25, 0) but counts as no intent
        let input = Vec2::new(0.05, 0.0);
        let v = integrate_velocity(Vec2::new(3.0, 0.0), input, 5.0, 10.0, 4.0, DT);
        // Decelerates at 4 * 0.02 = 0.08 toward the (small) target
        assert!((v.x - 2.92).abs() < 1e-5);
    }

    #[test]
    fn test_zero_move_speed_only_decelerates() {
        let v = integrate_velocity(Vec2::new(0.0, -1.0), Vec2::X, 0.0, 10.0, 5.0, DT);
        // Intent present so the acceleration rate applies, but the target is zero
        assert!((v.y + 0.8).abs() < 1e-5);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn test_roll_angle_36_degrees() {
        let angle = roll_angle_degrees(0.1 * PI, 0.5);
        assert!((angle - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_roll_rotation_sign() {
        let right = roll_rotation(
            Vec2::ZERO,
            Vec2::new(0.1 * PI, 0.0),
            Vec2::X,
            0.5,
            SpinPolicy::Horizontal,
        )
        .unwrap();
        assert!((right.rotation_degrees + 36.0).abs() < 1e-4);

        let left = roll_rotation(
            Vec2::ZERO,
            Vec2::new(-0.1 * PI, 0.0),
            -Vec2::X,
            0.5,
            SpinPolicy::Horizontal,
        )
        .unwrap();
        assert!((left.rotation_degrees - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_roll_requires_intent_and_distance() {
        let input = Vec2::new(0.05, 0.0);
        let drift = Vec2::new(0.2, 0.0);
        assert!(roll_rotation(Vec2::ZERO, drift, input, 0.5, SpinPolicy::Horizontal).is_none());
        let tiny = Vec2::new(0.0005, 0.0);
        assert!(roll_rotation(Vec2::ZERO, tiny, Vec2::X, 0.5, SpinPolicy::Horizontal).is_none());
    }

    #[test]
    fn test_vertical_travel_by_policy() {
        let up = Vec2::new(0.0, 0.3);
        let step = roll_rotation(Vec2::ZERO, up, Vec2::Y, 0.5, SpinPolicy::Horizontal).unwrap();
        assert_eq!(step.rotation_degrees, 0.0);
        assert!((step.distance - 0.3).abs() < 1e-6);

        let step = roll_rotation(Vec2::ZERO, up, Vec2::Y, 0.5, SpinPolicy::DominantAxis).unwrap();
        assert!(step.rotation_degrees < 0.0);
    }

    proptest! {
        #[test]
        fn prop_no_intent_never_speeds_up(
            vx in -10.0f32..10.0, vy in -10.0f32..10.0,
            ix in -0.07f32..0.07, iy in -0.07f32..0.07,
        ) {
            let v = Vec2::new(vx, vy);
            let input = Vec2::new(ix, iy);
            let next = integrate_velocity(v, input, 0.0, 10.0, 10.0, DT);
            // With zero speed the target is rest; velocity only shrinks
            prop_assert!(next.length() <= v.length() + 1e-5);
            prop_assert!((next - v).length() <= 10.0 * DT + 1e-5);
        }

        #[test]
        fn prop_change_capped_and_no_overshoot(
            vx in -10.0f32..10.0, vy in -10.0f32..10.0,
            ix in -1.0f32..1.0, iy in -1.0f32..1.0,
            accel in 0.0f32..50.0,
        ) {
            let v = Vec2::new(vx, vy);
            let input = Vec2::new(ix, iy);
            prop_assume!(input.length() > INPUT_DEAD_ZONE);
            let target = input * 5.0;
            let next = integrate_velocity(v, input, 5.0, accel, 10.0, DT);
            prop_assert!((next - v).length() <= accel * DT + 1e-4);
            prop_assert!((target - next).length() <= (target - v).length() + 1e-4);
        }

        #[test]
        fn prop_rotation_matches_arc_length(
            dx in -2.0f32..2.0, dy in -2.0f32..2.0,
            radius in 0.05f32..5.0,
        ) {
            let current = Vec2::new(dx, dy);
            prop_assume!(current.length() > MIN_ROLL_DISTANCE);
            let step =
                roll_rotation(Vec2::ZERO, current, Vec2::X, radius, SpinPolicy::Horizontal)
                    .unwrap();
            let expected = -(current.length() / (TAU * radius)) * 360.0 * sign_or_zero(dx);
            let tolerance = 1e-3 * expected.abs().max(1.0);
            prop_assert!((step.rotation_degrees - expected).abs() <= tolerance);
        }
    }
}
