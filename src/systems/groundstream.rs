//! Infinite ground streaming.
//!
//! The floor is an endless belt made of a handful of pooled chunk entities.
//! Each frame the streamer checks whether the camera's left edge has
//! crossed the transition threshold; when it has, the chunk that fell
//! behind is retired to the graveyard, the prepared `next` chunk becomes
//! `current`, and a fresh `next` chunk is placed flush against it. The
//! no-repeat draw excludes both the new `current` and the just-retired
//! `previous`, so the same chunk never shows twice in a row and never
//! three times across a transition.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::error::LevelInitError;
use crate::resources::camera2d::CameraView;
use crate::resources::groundstream::GroundStream;
use crate::resources::levelmanifest::LevelManifest;
use crate::resources::levelrng::LevelRng;
use crate::resources::segmentpool::{GRAVEYARD, SegmentPool};

/// Family name ground chunk entities are tagged with.
pub const GROUND_GROUP: &str = "ground_chunks";

/// Spawn one pooled entity per manifest ground chunk and build the
/// streaming state.
///
/// A random chunk starts as `current`, placed with its left edge on the
/// camera's left edge and resting on the ground line; its width is cached
/// as the uniform chunk width. Everything else starts at the graveyard.
pub fn spawn_ground_pool(
    world: &mut World,
    manifest: &LevelManifest,
    view: &CameraView,
    rng: &mut LevelRng,
) -> Result<GroundStream, LevelInitError> {
    let names = &manifest.ground_chunks;
    if names.len() < GroundStream::MIN_CHUNKS {
        return Err(LevelInitError::InsufficientSegments {
            family: GROUND_GROUP,
            found: names.len(),
            required: GroundStream::MIN_CHUNKS,
        });
    }

    let current = rng.index(names.len());
    let mut chunk_width = 0.0;
    let mut entities = Vec::with_capacity(names.len());

    for (i, name) in names.iter().enumerate() {
        let def = manifest.resolve(name)?;
        if def.width <= 0.0 {
            return Err(LevelInitError::InvalidSegmentWidth {
                name: name.clone(),
                width: def.width,
            });
        }

        let mut position = MapPosition { pos: GRAVEYARD };
        if i == current {
            chunk_width = def.width;
            position.pos = Vec2::new(view.left_edge_x() + def.width / 2.0, def.height / 2.0);
        }

        let entity = world
            .spawn((
                Group::new(GROUND_GROUP),
                position,
                Sprite::new(name.clone(), def.width, def.height),
                BoxCollider::centered(def.width, def.height),
            ))
            .id();
        entities.push(entity);
    }

    debug!(
        "ground pool ready: {} chunks, width {}, starting with #{current}",
        names.len(),
        chunk_width
    );

    Ok(GroundStream {
        pool: SegmentPool::new(entities),
        chunk_width,
        next_transition_x: view.left_edge_x(),
        initial_chunk: true,
        current,
        next: current,
        previous: None,
    })
}

/// Per-frame ground recycle.
///
/// Fires once the camera's left edge reaches `next_transition_x`. The new
/// `next` chunk is placed one full chunk past the threshold, centered on
/// its own width and resting on the ground line, which makes its left edge
/// flush with the current chunk's right edge.
pub fn generate_infinite_ground(
    mut stream: ResMut<GroundStream>,
    view: Res<CameraView>,
    mut rng: ResMut<LevelRng>,
    mut chunks: Query<(&mut MapPosition, &Sprite)>,
) {
    if view.left_edge_x() < stream.next_transition_x {
        return;
    }

    stream.previous = Some(stream.current);
    if !stream.initial_chunk {
        stream.current = stream.next;
    } else {
        stream.initial_chunk = false;
    }

    let forbidden = [stream.previous, Some(stream.current)];
    let Some(next) = rng.pick_excluding(stream.pool.len(), &forbidden) else {
        // Unreachable with the minimum pool size enforced at setup.
        warn!("ground pool has no chunk left to place, skipping transition");
        return;
    };
    stream.next = next;

    for (i, entity) in stream.pool.iter() {
        if i == stream.next {
            if let Ok((mut position, sprite)) = chunks.get_mut(entity) {
                position.pos = Vec2::new(
                    stream.next_transition_x + stream.chunk_width + stream.chunk_half_width(),
                    sprite.half_height(),
                );
            }
        } else if i != stream.current {
            if let Ok((mut position, _)) = chunks.get_mut(entity) {
                SegmentPool::bury(&mut position);
            }
        }
    }

    stream.next_transition_x += stream.chunk_width;
    debug!(
        "ground transition: current #{}, next #{} placed, threshold now {}",
        stream.current, stream.next, stream.next_transition_x
    );
}
