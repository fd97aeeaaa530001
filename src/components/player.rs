//! The gliding player.
//!
//! Collision physics and input hardware live with the host; this component
//! only stores the state the level core interacts with: whether the player
//! is alive, the forward speed, and the lift ratio currently applied by an
//! overlapping air stream.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    pub alive: bool,
    /// Forward speed in world units per second. Zeroed on death.
    pub speed: f32,
    /// Vertical displacement per second while inside an air stream;
    /// 0.0 outside any stream.
    pub lift_ratio: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Forward and steering speed while alive.
    pub const MAX_SPEED: f32 = 4.0;
    /// Starting altitude above the ground line.
    pub const INITIAL_ALTITUDE: f32 = 2.0;
    /// Falling speed clamp, per second.
    pub const MAX_FALLING_SPEED: f32 = 0.1;
    /// Crossing this world X ends the run.
    pub const MAX_POSITION_X: f32 = 1000.0;

    pub fn new() -> Self {
        Self {
            alive: true,
            speed: Self::MAX_SPEED,
            lift_ratio: 0.0,
        }
    }

    pub fn in_soaring_lift(&self) -> bool {
        self.lift_ratio != 0.0
    }

    /// Stop the run: the player no longer moves, lifts, or collides.
    pub fn kill(&mut self) {
        self.alive = false;
        self.speed = 0.0;
        self.lift_ratio = 0.0;
    }
}
