//! Player update: lift coupling, forward motion, and death conditions.
//!
//! Each frame the player either overlaps exactly the active air stream or
//! nothing, so the lift ratio is rewritten from scratch: entering a zone
//! copies its `lift_ratio`, leaving resets it to zero. The zone's
//! `directional_speed` is deliberately not folded into the player's
//! horizontal speed; that interaction is left to collaborators.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::airstream::AirStream;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::gamestate::{GameOverEvent, GameOverReason};
use crate::resources::worldtime::WorldTime;
use crate::systems::groundstream::GROUND_GROUP;

pub fn update_player(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut players: Query<(&mut Player, &mut MapPosition, &BoxCollider)>,
    zones: Query<(&AirStream, &MapPosition, &BoxCollider), Without<Player>>,
    obstacles: Query<
        (&Group, &MapPosition, &BoxCollider),
        (Without<Player>, Without<AirStream>),
    >,
) {
    for (mut player, mut position, collider) in players.iter_mut() {
        if !player.alive {
            continue;
        }

        // Lift coupling: copy the ratio of the overlapped zone, or clear it.
        player.lift_ratio = zones
            .iter()
            .find(|(_, zone_pos, zone_collider)| {
                collider.overlaps(position.pos, zone_collider, zone_pos.pos)
            })
            .map(|(zone, _, _)| zone.lift_ratio)
            .unwrap_or(0.0);

        if player.in_soaring_lift() {
            position.pos.y += player.lift_ratio * time.delta;
        }
        position.pos.x += player.speed * time.delta;

        if position.pos.x >= Player::MAX_POSITION_X {
            player.kill();
            info!("player crossed the level boundary at x={}", position.pos.x);
            commands.trigger(GameOverEvent {
                reason: GameOverReason::OutOfBounds,
            });
            continue;
        }

        let crashed = obstacles.iter().any(|(group, ground_pos, ground_collider)| {
            group.name() == GROUND_GROUP
                && collider.overlaps(position.pos, ground_collider, ground_pos.pos)
        });
        if crashed {
            player.kill();
            info!("player hit the ground at x={}", position.pos.x);
            commands.trigger(GameOverEvent {
                reason: GameOverReason::GroundContact,
            });
        }
    }
}
