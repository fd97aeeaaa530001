//! Shared 2D camera snapshot.
//!
//! [`CameraView`] is the read-only per-frame contract between the camera
//! and the level streamers: both only ever ask where the visible edges are.
//! The follow system refreshes the center each frame; nothing in the
//! streaming core mutates it.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// ECS resource holding the active camera center and half extents in world
/// units.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub center: Vec2,
    pub half_width: f32,
    pub half_height: f32,
}

impl CameraView {
    pub fn new(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    pub fn left_edge_x(&self) -> f32 {
        self.center.x - self.half_width
    }

    pub fn right_edge_x(&self) -> f32 {
        self.center.x + self.half_width
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.center.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_derive_from_center_and_half_width() {
        let view = CameraView::new(Vec2::new(10.0, 3.0), 8.0, 4.5);
        assert_eq!(view.left_edge_x(), 2.0);
        assert_eq!(view.right_edge_x(), 18.0);
        assert_eq!(view.width(), 16.0);
        assert_eq!(view.center_y(), 3.0);
    }
}
