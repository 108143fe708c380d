//! Rendering: engine state in, UI description out.
//!
//! [`render`] is a pure function; a front-end redraws from its result after
//! every action it dispatches.

pub mod text;
pub mod view;

pub use view::{CellView, MoveOption, RangeControl, View};

use crate::{engine::GameState, tictactoe::Outcome};

pub const TITLE: &str = "Tic Tac Toe";
pub const NEW_GAME_LABEL: &str = "New Game";

/// Describe the screen for `state`
pub fn render(state: &GameState) -> View {
    let current = state.current();
    let winning_line = state.winning_line();

    let cells = std::array::from_fn(|index| CellView {
        index,
        mark: current.get(index).to_player(),
        highlighted: winning_line.is_some_and(|line| line.contains(&index)),
    });

    let outcome = state.outcome();
    let selector = (0..state.history().len())
        .map(|step| MoveOption {
            step,
            description: move_description(step),
            selected: step == state.step_number(),
        })
        .collect();

    View {
        title: TITLE.to_string(),
        cells,
        outcome,
        status: status_line(outcome, state),
        selector,
        time_machine: RangeControl {
            min: 0,
            max: state.max_step(),
            value: state.step_number(),
            disabled: state.step_number() == 0,
        },
        current_step: step_label(state.step_number()),
        new_game_label: NEW_GAME_LABEL.to_string(),
    }
}

/// Selector text for a history entry
pub fn move_description(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

fn status_line(outcome: Outcome, state: &GameState) -> String {
    match outcome {
        Outcome::Win(player) => format!("Winner is: {player}"),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Next Player: {}", state.to_move()),
    }
}

fn step_label(step: usize) -> String {
    if step == 0 {
        "Start".to_string()
    } else {
        format!("Step #{step}")
    }
}
