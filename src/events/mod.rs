//! Event types and observers.
//!
//! Submodules:
//! - [`gamestate`] – end-of-run notification and the observer applying it

pub mod gamestate;
