//! Terminal classification of a board snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineAnalyzer, Player, Snapshot};

/// Outcome of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Whether no further moves may be made
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Classify a snapshot.
///
/// The eight lines are checked rows first, then columns, then diagonals;
/// the first complete line decides the winner. A full board without a
/// complete line is a draw.
pub fn evaluate(snapshot: &Snapshot) -> Outcome {
    if let Some(player) = LineAnalyzer::winner(snapshot) {
        Outcome::Win(player)
    } else if snapshot.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Snapshot::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Snapshot::from_string("XO.OX...X").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
        assert!(evaluate(&board).is_terminal());
    }

    #[test]
    fn test_draw_detection() {
        // XOX
        // XOO
        // OXX
        let board = Snapshot::from_string("XOXXOOOXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // XXX
        // OOX
        // XOO
        let board = Snapshot::from_string("XXXOOXXOO").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }
}
