//! High-level game state resource.
//!
//! Tracks the authoritative state of the session. Transitions are applied
//! by the [`GameOverEvent`](crate::events::gamestate::GameOverEvent)
//! observer or directly by the host after setup.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the session can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Setup,
    Playing,
    GameOver,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Setup`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Setup,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}
