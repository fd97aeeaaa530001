//! Air stream streaming state.
//!
//! Owns the lift-zone [`SegmentPool`] and the active-zone cursor. Unlike
//! the ground floor there is no current/next split: air streams are sparse
//! decorations, so exactly one zone is placed ahead of the camera at a time
//! and stale ones simply scroll out of relevance where they were left.

use bevy_ecs::prelude::Resource;

use crate::resources::segmentpool::SegmentPool;

#[derive(Resource, Debug)]
pub struct AirStreams {
    pub pool: SegmentPool,
    pub active: usize,
    /// True until the first zone has been placed.
    pub initial: bool,
    /// Zone retired on the latest recycle, `None` before the first one.
    pub previous: Option<usize>,
}

impl AirStreams {
    /// The no-repeat draw needs at least two zones to pick from.
    pub const MIN_STREAMS: usize = 2;
}
