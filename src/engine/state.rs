//! Game state with move history, cursor and time travel

use crate::{
    Error, Result,
    tictactoe::{LineAnalyzer, Outcome, Player, Snapshot, evaluate},
};

/// Complete engine state.
///
/// `history[0]` is the empty board and `history[n]` the board after move
/// `n`. `step_number` selects the snapshot currently shown and
/// `max_step` bounds the time-travel control. Operations never mutate a
/// state; they return the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Snapshot>,
    step_number: usize,
    max_step: usize,
}

impl GameState {
    /// Fresh game: a single empty snapshot, cursor and high-water mark at 0
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::new()],
            step_number: 0,
            max_step: 0,
        }
    }

    /// All snapshots of the current lineage
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot currently shown
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Furthest step reached in the current lineage
    pub fn max_step(&self) -> usize {
        self.max_step
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step_number]
    }

    /// Player to move, a function of cursor parity only
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step_number)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self.current())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LineAnalyzer::winning_line(self.current())
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Place the active mark at `index`.
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `index` is not in 0-8
    /// - [`Error::GameOver`] if the current snapshot already has a winner
    /// - [`Error::CellOccupied`] if the cell is taken
    pub fn try_apply_move(&self, index: usize) -> Result<GameState> {
        if index >= 9 {
            return Err(Error::InvalidPosition { position: index });
        }
        let current = self.current();
        if LineAnalyzer::winner(current).is_some() {
            return Err(Error::GameOver);
        }
        let next = current.with_mark(index, self.to_move())?;

        let mut history = self.history[..=self.step_number].to_vec();
        history.push(next);
        let step = history.len() - 1;

        Ok(GameState {
            history,
            step_number: step,
            max_step: step,
        })
    }

    /// Same as [`try_apply_move`](Self::try_apply_move), but a rejected move
    /// returns the state unchanged.
    #[must_use = "apply_move returns the next state; the original is unchanged"]
    pub fn apply_move(&self, index: usize) -> GameState {
        self.try_apply_move(index).unwrap_or_else(|_| self.clone())
    }

    /// Move the cursor to `step` without touching the history.
    ///
    /// The high-water mark only ever grows here; it is lowered again by the
    /// next accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepOutOfRange`] if `step` is past the last snapshot.
    pub fn try_jump_to(&self, step: usize) -> Result<GameState> {
        let last = self.history.len() - 1;
        if step > last {
            return Err(Error::StepOutOfRange {
                step,
                max_step: last,
            });
        }

        Ok(GameState {
            history: self.history.clone(),
            step_number: step,
            max_step: self.max_step.max(step),
        })
    }

    /// Same as [`try_jump_to`](Self::try_jump_to), but an out-of-range step
    /// returns the state unchanged.
    #[must_use = "jump_to returns the next state; the original is unchanged"]
    pub fn jump_to(&self, step: usize) -> GameState {
        self.try_jump_to(step).unwrap_or_else(|_| self.clone())
    }

    /// Discard everything and start over
    #[must_use = "new_game returns the next state; the original is unchanged"]
    pub fn new_game(&self) -> GameState {
        GameState::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn play(moves: &[usize]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(), |state, &index| state.try_apply_move(index).unwrap())
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert_eq!(state.max_step(), 0);
        assert_eq!(state.to_move(), Player::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_appends_and_toggles() {
        let state = play(&[4]);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.max_step(), 1);
        assert_eq!(state.current().get(4), Cell::X);
        assert_eq!(state.to_move(), Player::O);

        let state = state.apply_move(0);
        assert_eq!(state.current().get(0), Cell::O);
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let state = play(&[4]);
        let err = state.try_apply_move(4).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { position: 4 }));
        assert_eq!(state.apply_move(4), state);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let state = GameState::new();
        assert!(matches!(
            state.try_apply_move(9),
            Err(Error::InvalidPosition { position: 9 })
        ));
        assert_eq!(state.apply_move(42), state);
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        // X takes the top row
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.outcome(), Outcome::Win(Player::X));
        assert!(matches!(state.try_apply_move(8), Err(Error::GameOver)));
        assert_eq!(state.apply_move(8), state);
    }

    #[test]
    fn test_jump_sets_turn_from_parity() {
        let state = play(&[0, 1, 2]);
        assert_eq!(state.to_move(), Player::O);

        let back = state.jump_to(2);
        assert_eq!(back.step_number(), 2);
        assert_eq!(back.to_move(), Player::X);
        assert_eq!(back.max_step(), 3);
        assert_eq!(back.history(), state.history());
    }

    #[test]
    fn test_move_after_jump_truncates_redo_branch() {
        let state = play(&[0, 1, 2, 3]).jump_to(1);
        let branched = state.try_apply_move(8).unwrap();

        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step_number(), 2);
        assert_eq!(branched.max_step(), 2);
        assert_eq!(branched.current().get(8), Cell::O);
        assert_eq!(branched.current().get(2), Cell::Empty);
    }

    #[test]
    fn test_jump_back_then_forward() {
        let state = play(&[0, 1, 2]);
        let forward = state.jump_to(0).jump_to(3);
        assert_eq!(forward, state);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let state = play(&[0]);
        let err = state.try_jump_to(2).unwrap_err();
        assert!(matches!(err, Error::StepOutOfRange { step: 2, max_step: 1 }));
        assert_eq!(state.jump_to(2), state);
    }

    #[test]
    fn test_moves_allowed_when_viewing_past_win() {
        let won = play(&[0, 3, 1, 4, 2]);
        let rewound = won.jump_to(4);
        assert_eq!(rewound.outcome(), Outcome::InProgress);

        let replayed = rewound.try_apply_move(8).unwrap();
        assert_eq!(replayed.history().len(), 6);
        assert_eq!(replayed.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_new_game_resets() {
        let state = play(&[0, 4, 8]).jump_to(1).new_game();
        assert_eq!(state, GameState::new());
    }
}
