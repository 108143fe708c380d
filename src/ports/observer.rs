//! Observer port - abstraction for watching engine events
//!
//! This port lets a session report what happened to each dispatched action
//! without coupling the engine to a particular logging or test sink.

use crate::{
    Error, Result,
    engine::GameState,
    tictactoe::{Outcome, Player},
};

/// Observer trait for monitoring a game session
///
/// # Event Sequence
///
/// Exactly one hook fires per dispatched action:
/// - `on_move_applied` or `on_move_rejected` for a move
/// - `on_jump` or `on_jump_rejected` for a jump
/// - `on_new_game` for a reset
///
/// `on_game_over` fires additionally after a move that ends the game.
///
/// # Examples
///
/// ```
/// use tictactoe_time_machine::{ports::Observer, tictactoe::Outcome};
///
/// struct FinishCounter {
///     finished: usize,
/// }
///
/// impl Observer for FinishCounter {
///     fn on_game_over(&mut self, _outcome: Outcome) -> tictactoe_time_machine::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called after a move was accepted.
    ///
    /// # Parameters
    ///
    /// * `index` - Cell (0-8) that received the mark
    /// * `player` - Mark that was placed
    /// * `state` - State after the move
    fn on_move_applied(&mut self, _index: usize, _player: Player, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called when a move was ignored; the state is unchanged.
    fn on_move_rejected(&mut self, _index: usize, _reason: &Error) -> Result<()> {
        Ok(())
    }

    /// Called after the cursor moved to `step`.
    fn on_jump(&mut self, _step: usize, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called when a jump target was outside the history.
    fn on_jump_rejected(&mut self, _step: usize, _reason: &Error) -> Result<()> {
        Ok(())
    }

    /// Called after the history was reset.
    fn on_new_game(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called after an accepted move produced a win or a draw.
    fn on_game_over(&mut self, _outcome: Outcome) -> Result<()> {
        Ok(())
    }
}
