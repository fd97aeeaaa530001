//! Fixed pools of recyclable level entities.
//!
//! A [`SegmentPool`] is created once at setup with one entity per matching
//! asset and never resized. Entities are deactivated by parking them at a
//! fixed off-stage graveyard position instead of despawning them; streaming
//! is pure O(1) repositioning with no allocation.

use bevy_ecs::prelude::Entity;
use glam::Vec2;

use crate::components::mapposition::MapPosition;

/// Off-stage parking spot for inactive pooled entities. Far enough left
/// that a buried entity can never intersect the camera or the player.
pub const GRAVEYARD: Vec2 = Vec2::new(-100.0, 0.0);

/// Ordered, fixed-size collection of pooled entities. The index is the
/// entity's stable identity for the whole session.
#[derive(Debug, Clone)]
pub struct SegmentPool {
    entities: Vec<Entity>,
}

impl SegmentPool {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity at a pool index. Indices held by the streamers are always in
    /// range for the life of the session.
    pub fn entity(&self, index: usize) -> Entity {
        self.entities[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.entities.iter().copied().enumerate()
    }

    /// Park a pooled entity at the graveyard. Idempotent.
    pub fn bury(position: &mut MapPosition) {
        position.pos = GRAVEYARD;
    }

    pub fn is_buried(position: &MapPosition) -> bool {
        position.pos == GRAVEYARD
    }
}
