//! Fatal level-initialization errors.
//!
//! Streaming never fails once the pools exist; every failure mode surfaces
//! during setup and aborts the session. The binary logs the error and exits
//! with a non-zero status.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LevelInitError {
    /// A manifest entry has no sprite definition in the catalog.
    AssetNotFound { name: String },
    /// A streamed family has fewer assets than its minimum pool size.
    InsufficientSegments {
        family: &'static str,
        found: usize,
        required: usize,
    },
    /// Ground chunk widths must be positive; a zero or negative width would
    /// stall the transition threshold.
    InvalidSegmentWidth { name: String, width: f32 },
    /// The manifest file could not be read or parsed.
    Manifest(String),
}

impl fmt::Display for LevelInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelInitError::AssetNotFound { name } => {
                write!(f, "initialization aborted, unable to load sprite: {name}")
            }
            LevelInitError::InsufficientSegments {
                family,
                found,
                required,
            } => {
                write!(
                    f,
                    "initialization aborted, {family} needs at least {required} sprites, found {found}"
                )
            }
            LevelInitError::InvalidSegmentWidth { name, width } => {
                write!(f, "ground chunk {name} has a non-positive width ({width})")
            }
            LevelInitError::Manifest(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LevelInitError {}
