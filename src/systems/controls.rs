//! Vertical steering.
//!
//! Reads the host-written [`ControlIntent`] axis and translates the player
//! vertically, the way the source's joystick slider steered the glider.
//! Inert while `controls_enabled` is off in the config.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::ControlIntent;
use crate::resources::worldtime::WorldTime;

pub fn steer_player(
    intent: Res<ControlIntent>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut players: Query<(&Player, &mut MapPosition)>,
) {
    if !config.controls_enabled {
        return;
    }
    for (player, mut position) in players.iter_mut() {
        if !player.alive {
            continue;
        }
        position.pos.y += intent.clamped_vertical() * Player::MAX_SPEED * time.delta;
    }
}
