//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`airstream`] – lift configuration exposed by an airborne stream zone
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the gliding player's state (alive, speed, lift coupling)
//! - [`rigidbody`] – kinematic body storing velocity and gravity settings
//! - [`sprite`] – visual identity with bounding size in world units

pub mod airstream;
pub mod boxcollider;
pub mod group;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod sprite;
