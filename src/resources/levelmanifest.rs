//! Level manifest and sprite catalog.
//!
//! The original design discovered assets by scanning sprite directories at
//! startup. Here the caller supplies an explicit JSON manifest instead: an
//! ordered list of logical names per streamed family plus a catalog of
//! sprite bounds keyed by name. `resolve` is the asset-resolution contract
//! for the streaming core; a missing entry is fatal at setup.
//!
//! # Manifest format
//!
//! ```json
//! {
//!     "ground_chunks": ["ground_chunk_0", "ground_chunk_1", "ground_chunk_2"],
//!     "air_streams": ["air_stream_cold", "air_stream_hot"],
//!     "sprites": {
//!         "ground_chunk_0": { "width": 10.0, "height": 2.0 },
//!         "air_stream_hot": { "width": 1.5, "height": 3.0, "lift_ratio": 2.5 }
//!     }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::LevelInitError;

/// Bounding size of a sprite in world units, plus the lift configuration
/// for air stream sprites.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpriteDef {
    pub width: f32,
    pub height: f32,
    /// Vertical displacement per second applied inside this zone.
    /// Only meaningful for air stream sprites.
    #[serde(default)]
    pub lift_ratio: f32,
    /// Lateral push of the zone, `[x, y]`. Only meaningful for air streams.
    #[serde(default)]
    pub directional_speed: [f32; 2],
}

/// Ordered asset names for both streamed families and the sprite catalog
/// they resolve against.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct LevelManifest {
    pub ground_chunks: Vec<String>,
    pub air_streams: Vec<String>,
    pub sprites: FxHashMap<String, SpriteDef>,
}

impl LevelManifest {
    /// Load and parse a manifest from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, LevelInitError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LevelInitError::Manifest(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            LevelInitError::Manifest(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Look up the sprite definition for a logical asset name.
    pub fn resolve(&self, name: &str) -> Result<&SpriteDef, LevelInitError> {
        self.sprites
            .get(name)
            .ok_or_else(|| LevelInitError::AssetNotFound {
                name: name.to_string(),
            })
    }
}
