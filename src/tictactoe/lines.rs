//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, Snapshot};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in [`WINNING_LINES`] order) holding three equal marks
    pub fn winning_line(snapshot: &Snapshot) -> Option<[usize; 3]> {
        let cells = snapshot.cells();
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
        })
    }

    /// The mark that owns the first complete line, if any
    pub fn winner(snapshot: &Snapshot) -> Option<Player> {
        Self::winning_line(snapshot).and_then(|[a, _, _]| snapshot.get(a).to_player())
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(snapshot: &Snapshot, player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| snapshot.get(idx) == target))
    }
}
