//! Tic-Tac-Toe board, winning lines and outcome evaluation

pub mod board;
pub mod lines;
pub mod outcome;

pub use board::{Cell, Player, Snapshot};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, evaluate};
