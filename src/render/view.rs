//! Framework-free description of what the game screen shows

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Outcome, Player};

/// One clickable board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Position 0-8, row-major; this is the value a click sends back
    pub index: usize,
    pub mark: Option<Player>,
    /// Part of the winning line
    pub highlighted: bool,
}

/// Entry of the move selector ("protocol")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub step: usize,
    pub description: String,
    pub selected: bool,
}

/// The time-machine range input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeControl {
    pub min: usize,
    pub max: usize,
    pub value: usize,
    pub disabled: bool,
}

/// Everything a rendering surface needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub title: String,
    pub cells: [CellView; 9],
    pub outcome: Outcome,
    pub status: String,
    pub selector: Vec<MoveOption>,
    pub time_machine: RangeControl,
    pub current_step: String,
    pub new_game_label: String,
}

impl View {
    /// The selector entry matching the cursor
    pub fn selected_option(&self) -> Option<&MoveOption> {
        self.selector.iter().find(|option| option.selected)
    }
}
