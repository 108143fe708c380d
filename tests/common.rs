//! Common test utilities for the integration test suite.

use rand::{Rng, rngs::StdRng};
use tictactoe_time_machine::GameState;

/// Play a fixed sequence of cells, asserting every move is accepted.
pub fn play(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &index| {
        state
            .try_apply_move(index)
            .unwrap_or_else(|err| panic!("move {index} rejected: {err}"))
    })
}

/// Random cell in 0-8, occupied or not.
pub fn random_cell(rng: &mut StdRng) -> usize {
    rng.random_range(0..9)
}

/// Random empty cell of the current snapshot, if any.
pub fn random_empty_cell(state: &GameState, rng: &mut StdRng) -> Option<usize> {
    let empty = state.current().empty_positions();
    if empty.is_empty() {
        None
    } else {
        Some(empty[rng.random_range(0..empty.len())])
    }
}
