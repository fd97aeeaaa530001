//! Soarstream library.
//!
//! A pooled, endlessly-scrolling 2D level streamer built on `bevy_ecs`.
//! The world scrolls horizontally past a camera while two fixed pools of
//! recyclable entities are repositioned ahead of it: contiguous ground
//! chunks and sparse airborne "air stream" lift zones. Nothing is spawned
//! or despawned after setup.
//!
//! The world is y-up: altitude increases with `y`, the ground rests on
//! `y = 0`, and falling bodies have negative vertical velocity.
//!
//! This module exposes the ECS components, resources, systems, and events
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
