//! In-memory event recorder for testing.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    engine::GameState,
    ports::Observer,
    tictactoe::{Outcome, Player},
};

/// An engine event as seen by an observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    MoveApplied { index: usize, player: Player, step: usize },
    MoveRejected { index: usize, reason: String },
    Jumped { step: usize },
    JumpRejected { step: usize, reason: String },
    NewGame,
    GameOver(Outcome),
}

/// Observer that stores every event.
///
/// Clones share the same storage, so a test can keep one handle and give
/// another to a session.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<EngineEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EngineEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: EngineEvent) -> Result<()> {
        self.lock().push(event);
        Ok(())
    }
}

impl Observer for RecordingObserver {
    fn on_move_applied(&mut self, index: usize, player: Player, state: &GameState) -> Result<()> {
        self.record(EngineEvent::MoveApplied {
            index,
            player,
            step: state.step_number(),
        })
    }

    fn on_move_rejected(&mut self, index: usize, reason: &Error) -> Result<()> {
        self.record(EngineEvent::MoveRejected {
            index,
            reason: reason.to_string(),
        })
    }

    fn on_jump(&mut self, step: usize, _state: &GameState) -> Result<()> {
        self.record(EngineEvent::Jumped { step })
    }

    fn on_jump_rejected(&mut self, step: usize, reason: &Error) -> Result<()> {
        self.record(EngineEvent::JumpRejected {
            step,
            reason: reason.to_string(),
        })
    }

    fn on_new_game(&mut self) -> Result<()> {
        self.record(EngineEvent::NewGame)
    }

    fn on_game_over(&mut self, outcome: Outcome) -> Result<()> {
        self.record(EngineEvent::GameOver(outcome))
    }
}
