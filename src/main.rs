//! Soarstream main entry point.
//!
//! A pooled, endlessly-scrolling glider level built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D math
//! - **fastrand** for seedable level randomness
//!
//! This executable runs the simulation headless with a fixed timestep:
//! rendering and input hardware are host concerns, so the demo simply
//! drives the streamers and the glider until the run ends or a tick
//! budget is spent.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the level manifest
//! 2. Build the ECS world: pools, camera snapshot, player, RNG
//! 3. Register the game-over observer and the update schedule
//! 4. Step the schedule at the configured tick rate until game over
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 7 --ticks 100000
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use soarstream::events::gamestate::observe_game_over;
use soarstream::game;
use soarstream::resources::gameconfig::GameConfig;
use soarstream::resources::gamestate::{GameState, GameStates};
use soarstream::resources::input::ControlIntent;
use soarstream::resources::worldtime::WorldTime;
use soarstream::systems::airstream::generate_soaring_lifts;
use soarstream::systems::camera::follow_player;
use soarstream::systems::controls::steer_player;
use soarstream::systems::groundstream::generate_infinite_ground;
use soarstream::systems::movement::movement;
use soarstream::systems::player::update_player;
use soarstream::systems::time::update_world_time;

/// Soarstream: endless glider level streaming demo
#[derive(Parser)]
#[command(version, about = "Pooled side-scrolling level streamer")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level manifest path, overriding the config.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Seed for the level RNG, overriding the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulation ticks (0 = run until game over).
    #[arg(long, default_value_t = 0)]
    ticks: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(manifest) = cli.manifest {
        config.manifest_path = manifest;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    let tick_rate = config.tick_rate.max(1);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ControlIntent::default());
    world.insert_resource(GameState::new());

    if let Err(e) = game::setup(&mut world, &config) {
        log::error!("{e}");
        std::process::exit(1);
    }
    world.insert_resource(config);

    world.spawn(Observer::new(observe_game_over));
    world.flush();

    {
        let mut state = world.resource_mut::<GameState>();
        state.set(GameStates::Playing);
    }

    let mut update = Schedule::default();
    update.add_systems(steer_player);
    update.add_systems(movement.after(steer_player));
    update.add_systems(update_player.after(movement));
    update.add_systems(follow_player.after(update_player));
    update.add_systems(generate_infinite_ground.after(follow_player));
    update.add_systems(generate_soaring_lifts.after(follow_player));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let dt = 1.0 / tick_rate as f32;
    let mut ticks: u64 = 0;
    loop {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame

        ticks += 1;
        if *world.resource::<GameState>().get() == GameStates::GameOver {
            break;
        }
        if cli.ticks > 0 && ticks >= cli.ticks {
            break;
        }
    }
    log::info!("simulation ended after {ticks} ticks");
}
