//! Soaring lift recycling.
//!
//! Air streams are scattered thermal columns the glider can ride. One pool
//! zone at a time is the active one; once its trailing edge has fully
//! passed behind the camera's left edge, a different zone is relocated to
//! a random spot ahead of the camera. Inactive zones are not buried: they
//! are spaced far enough apart in X that stale ones simply scroll out of
//! relevance until they are drawn again.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::airstream::AirStream;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::error::LevelInitError;
use crate::resources::airstreams::AirStreams;
use crate::resources::camera2d::CameraView;
use crate::resources::levelmanifest::LevelManifest;
use crate::resources::levelrng::LevelRng;
use crate::resources::segmentpool::{GRAVEYARD, SegmentPool};

/// Family name air stream entities are tagged with.
pub const AIR_STREAM_GROUP: &str = "air_streams";

/// Minimum gap between the camera's right edge and a freshly placed zone.
const MIN_OFF_SCREEN_OFFSET_X: f32 = 1.0;
/// Maximum gap between the camera's right edge and a freshly placed zone.
const MAX_OFF_SCREEN_OFFSET_X: f32 = 10.0;
/// Vertical scatter around the camera's center.
const MAX_OFF_CAMERA_OFFSET_Y: f32 = 1.0;

/// Spawn one pooled entity per manifest air stream, all at the graveyard.
pub fn spawn_air_stream_pool(
    world: &mut World,
    manifest: &LevelManifest,
) -> Result<AirStreams, LevelInitError> {
    let names = &manifest.air_streams;
    if names.len() < AirStreams::MIN_STREAMS {
        return Err(LevelInitError::InsufficientSegments {
            family: AIR_STREAM_GROUP,
            found: names.len(),
            required: AirStreams::MIN_STREAMS,
        });
    }

    let mut entities = Vec::with_capacity(names.len());
    for name in names {
        let def = manifest.resolve(name)?;
        let entity = world
            .spawn((
                Group::new(AIR_STREAM_GROUP),
                MapPosition { pos: GRAVEYARD },
                Sprite::new(name.clone(), def.width, def.height),
                BoxCollider::centered(def.width, def.height),
                AirStream::new(def.lift_ratio, Vec2::from(def.directional_speed)),
            ))
            .id();
        entities.push(entity);
    }

    debug!("air stream pool ready: {} zones", names.len());

    Ok(AirStreams {
        pool: SegmentPool::new(entities),
        active: 0,
        initial: true,
        previous: None,
    })
}

/// Per-frame lift recycle.
///
/// Picks a different zone than the one just retired and drops it at a
/// random distance past the camera's right edge, within one world unit of
/// the camera's vertical center.
pub fn generate_soaring_lifts(
    mut streams: ResMut<AirStreams>,
    view: Res<CameraView>,
    mut rng: ResMut<LevelRng>,
    mut zones: Query<(&mut MapPosition, &Sprite), With<AirStream>>,
) {
    let recycle = streams.initial || {
        let active = streams.pool.entity(streams.active);
        match zones.get(active) {
            Ok((position, sprite)) => view.left_edge_x() >= position.pos.x + sprite.half_width(),
            Err(_) => false,
        }
    };
    if !recycle {
        return;
    }

    streams.previous = Some(streams.active);
    let Some(active) = rng.pick_excluding(streams.pool.len(), &[streams.previous]) else {
        // Unreachable with the minimum pool size enforced at setup.
        warn!("air stream pool has no zone left to place, skipping recycle");
        return;
    };
    streams.active = active;

    let x = rng.range_f32(
        view.right_edge_x() + MIN_OFF_SCREEN_OFFSET_X,
        view.right_edge_x() + MAX_OFF_SCREEN_OFFSET_X,
    );
    let y = rng.range_f32(
        view.center_y() - MAX_OFF_CAMERA_OFFSET_Y,
        view.center_y() + MAX_OFF_CAMERA_OFFSET_Y,
    );
    if let Ok((mut position, _)) = zones.get_mut(streams.pool.entity(streams.active)) {
        position.pos = Vec2::new(x, y);
    }
    streams.initial = false;

    debug!("air stream recycle: zone #{active} placed at ({x}, {y})");
}
