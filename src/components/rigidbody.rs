//! Kinematic body for gliding entities.
//!
//! Stores velocity plus the two knobs the glider needs: a gravity scale and
//! an optional falling-speed clamp. The movement system integrates gravity
//! into velocity and velocity into
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity, gravity scale, and a fall-speed clamp.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Multiplier applied to [`RigidBody::GRAVITY`]; 0.0 disables gravity.
    pub gravity_scale: f32,
    /// Maximum velocity magnitude while falling (velocity.y < 0), in world
    /// units per second. `None` leaves falling speed unclamped.
    pub max_fall_speed: Option<f32>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// World gravity acceleration, y-up.
    pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

    /// Create a RigidBody with zero velocity and gravity disabled.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 0.0,
            max_fall_speed: None,
        }
    }

    /// Enable gravity with the given scale.
    pub fn with_gravity(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Clamp falling speed to the given magnitude.
    pub fn with_max_fall_speed(mut self, speed: f32) -> Self {
        self.max_fall_speed = Some(speed);
        self
    }

    /// Rescale velocity to the clamp magnitude when falling faster than
    /// allowed. The whole vector is rescaled so the glide direction is kept.
    pub fn clamp_fall(&mut self) {
        if let Some(max) = self.max_fall_speed
            && self.velocity.y < 0.0
            && self.velocity.length() > max
        {
            self.velocity = self.velocity.normalize_or_zero() * max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_body_is_inert() {
        let body = RigidBody::new();
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(approx_eq(body.gravity_scale, 0.0));
        assert!(body.max_fall_speed.is_none());
    }

    #[test]
    fn clamp_fall_rescales_fast_falls() {
        let mut body = RigidBody::new().with_max_fall_speed(0.1);
        body.velocity = Vec2::new(0.0, -3.0);
        body.clamp_fall();
        assert!(approx_eq(body.velocity.length(), 0.1));
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn clamp_fall_keeps_direction() {
        let mut body = RigidBody::new().with_max_fall_speed(5.0);
        body.velocity = Vec2::new(-6.0, -8.0); // magnitude 10
        body.clamp_fall();
        assert!(approx_eq(body.velocity.x, -3.0));
        assert!(approx_eq(body.velocity.y, -4.0));
    }

    #[test]
    fn clamp_fall_ignores_rising_bodies() {
        let mut body = RigidBody::new().with_max_fall_speed(0.1);
        body.velocity = Vec2::new(0.0, 3.0);
        body.clamp_fall();
        assert!(approx_eq(body.velocity.y, 3.0));
    }

    #[test]
    fn clamp_fall_without_limit_is_noop() {
        let mut body = RigidBody::new();
        body.velocity = Vec2::new(0.0, -100.0);
        body.clamp_fall();
        assert!(approx_eq(body.velocity.y, -100.0));
    }
}
