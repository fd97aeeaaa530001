//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `airstreams` – pooled air stream zones and the active-zone cursor
//! - `camera2d` – per-frame camera snapshot for world-edge math
//! - `gameconfig` – settings loaded from an INI configuration file
//! - `gamestate` – authoritative high-level game state
//! - `groundstream` – pooled ground chunks and the transition threshold
//! - `input` – host-written steering intent
//! - `levelmanifest` – ordered asset names plus the sprite bounds catalog
//! - `levelrng` – seedable random source with bounded no-repeat draws
//! - `segmentpool` – fixed entity pools with graveyard placement
//! - `worldtime` – simulation time and delta

pub mod airstreams;
pub mod camera2d;
pub mod gameconfig;
pub mod gamestate;
pub mod groundstream;
pub mod input;
pub mod levelmanifest;
pub mod levelrng;
pub mod segmentpool;
pub mod worldtime;
