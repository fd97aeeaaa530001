use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned rectangular collider in world units.
///
/// `offset` shifts the box relative to the owning entity's
/// [`MapPosition`](super::mapposition::MapPosition) pivot.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at the pivot.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Create a BoxCollider centered on the pivot, the shape pooled level
    /// entities use since their placement math positions sprite centers.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vec2::new(-width / 2.0, -height / 2.0))
    }

    /// Modify BoxCollider with given offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vec2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vec2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_collider_straddles_pivot() {
        let collider = BoxCollider::centered(4.0, 2.0);
        let (min, max) = collider.aabb(Vec2::new(10.0, 5.0));
        assert_eq!(min, Vec2::new(8.0, 4.0));
        assert_eq!(max, Vec2::new(12.0, 6.0));
    }

    #[test]
    fn aabb_normalizes_negative_size() {
        let collider = BoxCollider::new(-4.0, -2.0);
        let (min, max) = collider.aabb(Vec2::ZERO);
        assert_eq!(min, Vec2::new(-4.0, -2.0));
        assert_eq!(max, Vec2::ZERO);
    }

    #[test]
    fn overlapping_boxes_are_detected() {
        let a = BoxCollider::centered(2.0, 2.0);
        let b = BoxCollider::centered(2.0, 2.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(1.5, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(2.5, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::centered(2.0, 2.0);
        let b = BoxCollider::centered(2.0, 2.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn contains_point_in_world_space() {
        let collider = BoxCollider::centered(2.0, 2.0);
        assert!(collider.contains_point(Vec2::new(5.0, 5.0), Vec2::new(5.9, 4.1)));
        assert!(!collider.contains_point(Vec2::new(5.0, 5.0), Vec2::new(7.0, 5.0)));
    }
}
