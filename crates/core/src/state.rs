// Player lifecycle state management

use crate::error::{AudioError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No player object exists
    Idle,
    /// Player object created and realized
    Realized,
    /// Play state set to playing, waiting for completion
    Playing,
    /// Completion or underflow observed
    Finished,
    /// A platform call failed
    Error,
}

/// Thread-safe player state container
#[derive(Clone)]
pub struct PlayerStateContainer {
    state: Arc<RwLock<PlayerState>>,
}

impl PlayerStateContainer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(PlayerState::Idle)),
        }
    }

    pub fn get_state(&self) -> PlayerState {
        *self.state.read()
    }

    pub fn set_state(&self, new_state: PlayerState) {
        *self.state.write() = new_state;
        log::debug!("Player state changed to: {:?}", new_state);
    }

    /// Move to `to` if the transition is allowed, returning the previous state
    pub fn transition(&self, to: PlayerState) -> Result<PlayerState> {
        let mut state = self.state.write();
        let from = *state;
        if !Self::is_valid_transition(from, to) {
            return Err(AudioError::InvalidState(format!(
                "Invalid state transition from {:?} to {:?}",
                from, to
            )));
        }
        *state = to;
        log::debug!("Player state changed: {:?} -> {:?}", from, to);
        Ok(from)
    }

    fn is_valid_transition(from: PlayerState, to: PlayerState) -> bool {
        matches!(
            (from, to),
            (PlayerState::Idle, PlayerState::Realized)
                | (PlayerState::Realized, PlayerState::Playing)
                | (PlayerState::Playing, PlayerState::Finished)
                | (PlayerState::Finished, PlayerState::Idle)
                | (PlayerState::Error, PlayerState::Idle)
                | (_, PlayerState::Error)
        )
    }
}

impl Default for PlayerStateContainer {
    fn default() -> Self {
        Self::new()
    }
}
