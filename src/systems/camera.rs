//! Camera follow.
//!
//! Keeps the camera slightly ahead of the player along X and refreshes the
//! [`CameraView`] snapshot both streamers read. The camera's vertical
//! center stays fixed; air streams scatter around it.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::CameraView;

/// Horizontal offset between the player and the camera center.
pub const LOOK_AHEAD_X: f32 = 2.0;

pub fn follow_player(
    players: Query<&MapPosition, With<Player>>,
    mut view: ResMut<CameraView>,
) {
    if let Some(position) = players.iter().next() {
        view.center.x = position.pos.x + LOOK_AHEAD_X;
    }
}
