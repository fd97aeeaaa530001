use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Lift configuration an air stream zone exposes to entities overlapping it.
///
/// `lift_ratio` is the vertical displacement per second applied while inside
/// the zone; negative values model cold, sinking air. `directional_speed` is
/// the stream's lateral push. It is exposed read-only for collaborators; the
/// horizontal-speed interaction is unspecified and nothing consumes it yet.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AirStream {
    pub lift_ratio: f32,
    pub directional_speed: Vec2,
}

impl AirStream {
    pub fn new(lift_ratio: f32, directional_speed: Vec2) -> Self {
        Self {
            lift_ratio,
            directional_speed,
        }
    }
}
