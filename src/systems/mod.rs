//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation each
//! tick.
//!
//! Submodules overview
//! - [`airstream`] – recycle lift zones ahead of the camera
//! - [`camera`] – follow the player and refresh the camera snapshot
//! - [`controls`] – translate steering intent into vertical movement
//! - [`groundstream`] – stream the contiguous ground floor
//! - [`movement`] – integrate gravity and velocity into positions
//! - [`player`] – lift coupling, forward motion, and death conditions
//! - [`time`] – update simulation time and delta

pub mod airstream;
pub mod camera;
pub mod controls;
pub mod groundstream;
pub mod movement;
pub mod player;
pub mod time;
