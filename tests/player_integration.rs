//! Integration tests for the glider: lift coupling, steering, physics,
//! death conditions, and the camera follow contract.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashMap;

use soarstream::components::airstream::AirStream;
use soarstream::components::boxcollider::BoxCollider;
use soarstream::components::group::Group;
use soarstream::components::mapposition::MapPosition;
use soarstream::components::player::Player;
use soarstream::components::rigidbody::RigidBody;
use soarstream::events::gamestate::observe_game_over;
use soarstream::game;
use soarstream::resources::airstreams::AirStreams;
use soarstream::resources::camera2d::CameraView;
use soarstream::resources::gameconfig::GameConfig;
use soarstream::resources::gamestate::{GameState, GameStates};
use soarstream::resources::groundstream::GroundStream;
use soarstream::resources::input::ControlIntent;
use soarstream::resources::levelmanifest::{LevelManifest, SpriteDef};
use soarstream::resources::levelrng::LevelRng;
use soarstream::resources::worldtime::WorldTime;
use soarstream::systems::airstream::{AIR_STREAM_GROUP, generate_soaring_lifts};
use soarstream::systems::camera::{LOOK_AHEAD_X, follow_player};
use soarstream::systems::controls::steer_player;
use soarstream::systems::groundstream::{GROUND_GROUP, generate_infinite_ground};
use soarstream::systems::movement::movement;
use soarstream::systems::player::update_player;
use soarstream::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ControlIntent::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(GameState::new());
    world.spawn(Observer::new(observe_game_over));
    world.flush();
    world
}

/// One simulation step: steering, physics, then the player update.
fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(steer_player);
    schedule.add_systems(movement.after(steer_player));
    schedule.add_systems(update_player.after(movement));
    schedule.run(world);
    world.clear_trackers();
}

fn spawn_glider(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Player::new(),
            MapPosition::new(x, y),
            BoxCollider::centered(1.0, 0.5),
        ))
        .id()
}

fn spawn_zone(world: &mut World, lift_ratio: f32, x: f32, y: f32, size: f32) -> Entity {
    world
        .spawn((
            Group::new(AIR_STREAM_GROUP),
            AirStream::new(lift_ratio, Vec2::ZERO),
            MapPosition::new(x, y),
            BoxCollider::centered(size, size),
        ))
        .id()
}

fn spawn_ground(world: &mut World, x: f32) -> Entity {
    world
        .spawn((
            Group::new(GROUND_GROUP),
            MapPosition::new(x, 0.5),
            BoxCollider::centered(10.0, 1.0),
        ))
        .id()
}

fn player_state(world: &mut World, entity: Entity) -> (Player, Vec2) {
    let player = *world.get::<Player>(entity).unwrap();
    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    (player, pos)
}

fn game_state(world: &World) -> GameStates {
    *world.resource::<GameState>().get()
}

// ==================== LIFT COUPLING ====================

#[test]
fn overlapping_a_hot_stream_lifts_the_glider() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 2.0);
    spawn_zone(&mut world, 2.0, 0.0, 2.0, 4.0);

    tick(&mut world, 0.5);

    let (player, pos) = player_state(&mut world, glider);
    assert!(approx_eq(player.lift_ratio, 2.0));
    assert!(approx_eq(pos.y, 3.0)); // 2.0 + 2.0 * 0.5
    assert!(approx_eq(pos.x, 2.0)); // 0.0 + 4.0 * 0.5
}

#[test]
fn a_cold_stream_pushes_the_glider_down() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 3.0);
    spawn_zone(&mut world, -1.5, 0.0, 3.0, 4.0);

    tick(&mut world, 0.5);

    let (player, pos) = player_state(&mut world, glider);
    assert!(approx_eq(player.lift_ratio, -1.5));
    assert!(approx_eq(pos.y, 2.25)); // 3.0 - 1.5 * 0.5
}

#[test]
fn leaving_the_stream_clears_the_lift() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 2.0);
    spawn_zone(&mut world, 2.0, 0.0, 2.0, 1.0);

    // First step overlaps the small zone and rides it out of range.
    tick(&mut world, 0.5);
    let (player, pos) = player_state(&mut world, glider);
    assert!(approx_eq(player.lift_ratio, 2.0));
    assert!(approx_eq(pos.y, 3.0));

    // Second step no longer overlaps: the ratio resets and the glider
    // holds its altitude.
    tick(&mut world, 0.5);
    let (player, pos) = player_state(&mut world, glider);
    assert!(approx_eq(player.lift_ratio, 0.0));
    assert!(approx_eq(pos.y, 3.0));
    assert!(approx_eq(pos.x, 4.0));
}

// ==================== DEATH CONDITIONS ====================

#[test]
fn ground_contact_ends_the_run() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 1.1);
    spawn_ground(&mut world, 0.0);

    tick(&mut world, 0.01);

    let (player, _) = player_state(&mut world, glider);
    assert!(!player.alive);
    assert!(approx_eq(player.speed, 0.0));
    assert_eq!(game_state(&world), GameStates::GameOver);
}

#[test]
fn crossing_the_level_boundary_ends_the_run() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, Player::MAX_POSITION_X - 0.5, 5.0);

    tick(&mut world, 0.5);

    let (player, pos) = player_state(&mut world, glider);
    assert!(!player.alive);
    assert!(pos.x >= Player::MAX_POSITION_X);
    assert_eq!(game_state(&world), GameStates::GameOver);
}

#[test]
fn a_dead_glider_stops_moving() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 1.1);
    spawn_ground(&mut world, 0.0);

    tick(&mut world, 0.01);
    let (_, at_death) = player_state(&mut world, glider);

    world.resource_mut::<ControlIntent>().vertical = 1.0;
    tick(&mut world, 0.5);
    let (player, pos) = player_state(&mut world, glider);
    assert!(!player.alive);
    assert_eq!(pos, at_death);
}

#[test]
fn flying_clear_of_the_ground_stays_alive() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 3.0);
    spawn_ground(&mut world, 0.0);

    for _ in 0..20 {
        tick(&mut world, 0.01);
    }

    let (player, _) = player_state(&mut world, glider);
    assert!(player.alive);
    assert_eq!(game_state(&world), GameStates::Setup);
}

// ==================== STEERING ====================

#[test]
fn steering_translates_the_glider_vertically() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 2.0);

    world.resource_mut::<ControlIntent>().vertical = -1.0;
    tick(&mut world, 0.25);

    let (_, pos) = player_state(&mut world, glider);
    assert!(approx_eq(pos.y, 2.0 - Player::MAX_SPEED * 0.25));
    assert!(approx_eq(pos.x, Player::MAX_SPEED * 0.25));
}

#[test]
fn steering_is_inert_while_controls_are_disabled() {
    let mut world = make_world();
    let glider = spawn_glider(&mut world, 0.0, 2.0);

    world.resource_mut::<GameConfig>().controls_enabled = false;
    world.resource_mut::<ControlIntent>().vertical = 1.0;
    tick(&mut world, 0.25);

    let (_, pos) = player_state(&mut world, glider);
    assert!(approx_eq(pos.y, 2.0)); // unchanged
    assert!(approx_eq(pos.x, Player::MAX_SPEED * 0.25)); // forward motion stays
}

// ==================== PHYSICS ====================

#[test]
fn gravity_never_exceeds_the_falling_speed_clamp() {
    let mut world = make_world();
    let glider = world
        .spawn((
            Player::new(),
            MapPosition::new(0.0, 2.0),
            BoxCollider::centered(1.0, 0.5),
            RigidBody::new()
                .with_gravity(1.0)
                .with_max_fall_speed(Player::MAX_FALLING_SPEED),
        ))
        .id();

    let dt = 1.0 / 120.0;
    for _ in 0..120 {
        tick(&mut world, dt);
    }

    let body = *world.get::<RigidBody>(glider).unwrap();
    assert!(body.velocity.length() <= Player::MAX_FALLING_SPEED + EPSILON);

    // One second of clamped gliding sinks about one clamp-length.
    let (_, pos) = player_state(&mut world, glider);
    let drop = 2.0 - pos.y;
    assert!(drop > 0.05 && drop < 0.15, "unexpected drop {drop}");
}

// ==================== CAMERA ====================

#[test]
fn camera_stays_ahead_of_the_glider() {
    let mut world = make_world();
    world.insert_resource(CameraView::new(Vec2::ZERO, 8.0, 4.5));
    spawn_glider(&mut world, 7.0, 2.0);

    let mut schedule = Schedule::default();
    schedule.add_systems(follow_player);
    schedule.run(&mut world);

    let view = world.resource::<CameraView>();
    assert!(approx_eq(view.center.x, 7.0 + LOOK_AHEAD_X));
    assert!(approx_eq(view.center.y, 0.0));
}

// ==================== FULL SESSION ====================

fn session_manifest() -> LevelManifest {
    let mut sprites = FxHashMap::default();
    let mut ground_chunks = Vec::new();
    for i in 0..4 {
        let name = format!("ground_chunk_{i}");
        sprites.insert(
            name.clone(),
            SpriteDef {
                width: 10.0,
                height: 1.0,
                lift_ratio: 0.0,
                directional_speed: [0.0, 0.0],
            },
        );
        ground_chunks.push(name);
    }
    // Updrafts only, so a long session never gets pushed into the ground.
    let mut air_streams = Vec::new();
    for (i, lift) in [2.5_f32, 1.0].iter().enumerate() {
        let name = format!("air_stream_{i}");
        sprites.insert(
            name.clone(),
            SpriteDef {
                width: 1.5,
                height: 3.0,
                lift_ratio: *lift,
                directional_speed: [0.0, 0.0],
            },
        );
        air_streams.push(name);
    }
    sprites.insert(
        "player".to_string(),
        SpriteDef {
            width: 1.0,
            height: 0.5,
            lift_ratio: 0.0,
            directional_speed: [0.0, 0.0],
        },
    );
    LevelManifest {
        ground_chunks,
        air_streams,
        sprites,
    }
}

/// Drives the full update schedule for a few seconds of simulated flight
/// and checks the level keeps streaming underneath a living glider.
#[test]
fn a_full_session_streams_the_level_under_the_glider() {
    let mut world = make_world();
    let manifest = session_manifest();
    let view = CameraView::new(Vec2::ZERO, 8.0, 4.5);
    game::spawn_level(&mut world, &manifest, view, LevelRng::seeded(42)).unwrap();
    world.resource_mut::<GameState>().set(GameStates::Playing);

    let mut update = Schedule::default();
    update.add_systems(steer_player);
    update.add_systems(movement.after(steer_player));
    update.add_systems(update_player.after(movement));
    update.add_systems(follow_player.after(update_player));
    update.add_systems(generate_infinite_ground.after(follow_player));
    update.add_systems(generate_soaring_lifts.after(follow_player));

    let dt = 1.0 / 120.0;
    for _ in 0..700 {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    // Still flying after ~5.8 simulated seconds.
    assert_eq!(game_state(&world), GameStates::Playing);

    // The floor kept up with the camera: several transitions happened and
    // the active chunk pair is intact.
    let stream = world.resource::<GroundStream>();
    assert!(!stream.initial_chunk);
    assert!(stream.next_transition_x >= 12.0 - EPSILON);
    assert_ne!(stream.current, stream.next);

    // At least one air stream was placed ahead of the camera.
    assert!(!world.resource::<AirStreams>().initial);
}

#[test]
fn identically_seeded_sessions_stay_in_lockstep() {
    let mut worlds = Vec::new();
    for _ in 0..2 {
        let mut world = make_world();
        let view = CameraView::new(Vec2::ZERO, 8.0, 4.5);
        game::spawn_level(&mut world, &session_manifest(), view, LevelRng::seeded(7)).unwrap();

        let mut update = Schedule::default();
        update.add_systems(steer_player);
        update.add_systems(movement.after(steer_player));
        update.add_systems(update_player.after(movement));
        update.add_systems(follow_player.after(update_player));
        update.add_systems(generate_infinite_ground.after(follow_player));
        update.add_systems(generate_soaring_lifts.after(follow_player));

        let dt = 1.0 / 120.0;
        for _ in 0..300 {
            update_world_time(&mut world, dt);
            update.run(&mut world);
            world.clear_trackers();
        }
        worlds.push(world);
    }

    let (a, b) = (&worlds[0], &worlds[1]);
    let (sa, sb) = (
        a.resource::<GroundStream>(),
        b.resource::<GroundStream>(),
    );
    assert_eq!(sa.current, sb.current);
    assert_eq!(sa.next, sb.next);
    assert!(approx_eq(sa.next_transition_x, sb.next_transition_x));
    assert_eq!(
        a.resource::<AirStreams>().active,
        b.resource::<AirStreams>().active
    );
}
