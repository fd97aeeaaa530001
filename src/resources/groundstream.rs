//! Ground chunk streaming state.
//!
//! Owns the ground [`SegmentPool`] and the cursor state that decides when
//! the floor has scrolled far enough to recycle a chunk. Ground chunks are
//! assumed to share one width: the first current chunk's width is cached in
//! `chunk_width` and reused for all placement math.

use bevy_ecs::prelude::Resource;

use crate::resources::segmentpool::SegmentPool;

/// Streaming state for the contiguous ground floor.
///
/// At most one pool index is `current` (the chunk under or behind the
/// camera) and one is `next` (the chunk placed ahead of it); every other
/// chunk sits at the graveyard. `next_transition_x` only ever grows.
#[derive(Resource, Debug)]
pub struct GroundStream {
    pub pool: SegmentPool,
    /// Uniform chunk width in world units, cached at setup.
    pub chunk_width: f32,
    /// Camera-left-edge X that fires the next recycle.
    pub next_transition_x: f32,
    /// True until the first transition; the startup chunk stays current
    /// through it.
    pub initial_chunk: bool,
    pub current: usize,
    pub next: usize,
    /// Index retired on the latest transition, `None` before the first one.
    pub previous: Option<usize>,
}

impl GroundStream {
    /// Smallest pool that keeps one chunk fully off-camera while the other
    /// two hand over without a visible seam.
    pub const MIN_CHUNKS: usize = 3;

    pub fn chunk_half_width(&self) -> f32 {
        self.chunk_width / 2.0
    }
}
