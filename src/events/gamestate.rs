//! Game over event and observer.
//!
//! The player system triggers [`GameOverEvent`] when a death condition
//! fires; the observer flips the authoritative
//! [`GameState`](crate::resources::gamestate::GameState) so the host loop
//! can stop. Register it with `world.spawn(Observer::new(observe_game_over))`.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameState, GameStates};

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The player collided with the ground.
    GroundContact,
    /// The player crossed the level's kill boundary.
    OutOfBounds,
}

/// Fired once when the run ends. Late duplicates (e.g. hitting the ground
/// and the boundary in the same frame) are ignored by the observer.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub reason: GameOverReason,
}

/// Global observer applying the game-over transition.
pub fn observe_game_over(trigger: On<GameOverEvent>, mut state: ResMut<GameState>) {
    if *state.get() == GameStates::GameOver {
        return;
    }
    info!("game over: {:?}", trigger.event().reason);
    state.set(GameStates::GameOver);
}
