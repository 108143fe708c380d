//! User actions and the state reducer

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::GameState;
use crate::Error;

/// Something the player asked the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the active mark on a cell (0-8)
    Move(usize),
    /// Move the cursor to a step of the history
    JumpTo(usize),
    /// Discard the history and start over
    NewGame,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(index) => write!(f, "move {index}"),
            Action::JumpTo(step) => write!(f, "jump {step}"),
            Action::NewGame => write!(f, "new"),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Parse `4`, `move 4`, `m 4`, `jump 2`, `j 2`, `new` or `reset`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidAction {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let parse_number = |token: Option<&str>, what: &str| -> Result<usize, Error> {
            token
                .ok_or_else(|| invalid(&format!("missing {what}")))?
                .parse::<usize>()
                .map_err(|_| invalid(&format!("{what} must be a non-negative integer")))
        };

        let mut tokens = s.split_whitespace();
        let command = tokens.next().ok_or_else(|| invalid("empty input"))?;

        let action = match command.to_ascii_lowercase().as_str() {
            "move" | "m" => Action::Move(parse_number(tokens.next(), "cell")?),
            "jump" | "j" | "goto" => Action::JumpTo(parse_number(tokens.next(), "step")?),
            "new" | "reset" => Action::NewGame,
            other => match other.parse::<usize>() {
                Ok(index) => Action::Move(index),
                Err(_) => return Err(invalid("expected move <cell>, jump <step> or new")),
            },
        };

        if tokens.next().is_some() {
            return Err(invalid("unexpected trailing input"));
        }
        Ok(action)
    }
}

/// Parse a script of actions.
///
/// Actions are separated by newlines or `;`. Blank entries are skipped and
/// a line starting with `#` is a comment.
///
/// # Errors
///
/// Returns [`Error::InvalidScript`] naming the 1-based line of the first
/// action that fails to parse.
pub fn parse_script(script: &str) -> Result<Vec<Action>, Error> {
    let mut actions = Vec::new();
    for (line_no, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        for entry in line.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let action = entry.parse::<Action>().map_err(|source| Error::InvalidScript {
                line: line_no + 1,
                source: Box::new(source),
            })?;
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Compute the next state for an action.
///
/// Rejected moves and out-of-range jumps leave the state unchanged.
pub fn update(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Move(index) => state.apply_move(index),
        Action::JumpTo(step) => state.jump_to(step),
        Action::NewGame => state.new_game(),
    }
}
