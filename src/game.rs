//! Level and session setup.
//!
//! Builds the whole streamed level from a manifest: both entity pools, the
//! camera snapshot, the RNG, and the player. Pools are created exactly
//! once here; from then on the per-frame systems only reposition what
//! already exists.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::error::LevelInitError;
use crate::resources::camera2d::CameraView;
use crate::resources::gameconfig::GameConfig;
use crate::resources::levelmanifest::{LevelManifest, SpriteDef};
use crate::resources::levelrng::LevelRng;
use crate::systems::airstream::spawn_air_stream_pool;
use crate::systems::camera::LOOK_AHEAD_X;
use crate::systems::groundstream::spawn_ground_pool;

/// Fallback bounds when the manifest has no "player" sprite entry.
const DEFAULT_PLAYER_SPRITE: SpriteDef = SpriteDef {
    width: 1.0,
    height: 0.5,
    lift_ratio: 0.0,
    directional_speed: [0.0, 0.0],
};

/// Load the manifest named by the config and build the level in `world`.
pub fn setup(world: &mut World, config: &GameConfig) -> Result<(), LevelInitError> {
    let manifest = LevelManifest::load_from_file(&config.manifest_path)?;
    let view = CameraView::new(
        Vec2::ZERO,
        config.camera_half_width,
        config.camera_half_height,
    );
    let rng = match config.seed {
        Some(seed) => LevelRng::seeded(seed),
        None => LevelRng::new(),
    };
    spawn_level(world, &manifest, view, rng)?;
    world.insert_resource(manifest);
    Ok(())
}

/// Build the level from an in-memory manifest: spawn both pools and the
/// player, then insert the streaming resources.
pub fn spawn_level(
    world: &mut World,
    manifest: &LevelManifest,
    view: CameraView,
    mut rng: LevelRng,
) -> Result<(), LevelInitError> {
    let ground = spawn_ground_pool(world, manifest, &view, &mut rng)?;
    let streams = spawn_air_stream_pool(world, manifest)?;
    spawn_player(world, manifest, &view);

    world.insert_resource(ground);
    world.insert_resource(streams);
    world.insert_resource(view);
    world.insert_resource(rng);
    Ok(())
}

/// Spawn the glider behind the camera center, at the starting altitude.
fn spawn_player(world: &mut World, manifest: &LevelManifest, view: &CameraView) {
    let def = manifest
        .sprites
        .get("player")
        .copied()
        .unwrap_or(DEFAULT_PLAYER_SPRITE);
    world.spawn((
        Group::new("player"),
        Player::new(),
        MapPosition::new(view.center.x - LOOK_AHEAD_X, Player::INITIAL_ALTITUDE),
        Sprite::new("player", def.width, def.height),
        BoxCollider::centered(def.width, def.height),
        RigidBody::new()
            .with_gravity(1.0)
            .with_max_fall_speed(Player::MAX_FALLING_SPEED),
    ));
}
