//! Line-oriented diagnostic log of engine events.

use std::io::{self, Stderr, Write};

use crate::{
    Error, Result,
    engine::GameState,
    ports::Observer,
    tictactoe::{Outcome, Player},
};

/// Writes one `[engine] ...` line per event.
///
/// Defaults to stderr so the log never mixes with rendered views on stdout.
pub struct LogObserver<W: Write + Send = Stderr> {
    writer: W,
}

impl LogObserver<Stderr> {
    pub fn new() -> Self {
        Self {
            writer: io::stderr(),
        }
    }
}

impl Default for LogObserver<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> LogObserver<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn log(&mut self, message: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.writer, "[engine] {message}").map_err(|source| Error::Io {
            operation: "write engine log".to_string(),
            source,
        })
    }
}

impl<W: Write + Send> Observer for LogObserver<W> {
    fn on_move_applied(&mut self, index: usize, player: Player, state: &GameState) -> Result<()> {
        self.log(format_args!(
            "{player} -> cell {index} (step {}, board {})",
            state.step_number(),
            state.current().encode()
        ))
    }

    fn on_move_rejected(&mut self, index: usize, reason: &Error) -> Result<()> {
        self.log(format_args!("ignored move at cell {index}: {reason}"))
    }

    fn on_jump(&mut self, step: usize, state: &GameState) -> Result<()> {
        self.log(format_args!(
            "jumped to step {step} of {} ({} to move)",
            state.max_step(),
            state.to_move()
        ))
    }

    fn on_jump_rejected(&mut self, step: usize, reason: &Error) -> Result<()> {
        self.log(format_args!("ignored jump to step {step}: {reason}"))
    }

    fn on_new_game(&mut self) -> Result<()> {
        self.log(format_args!("new game"))
    }

    fn on_game_over(&mut self, outcome: Outcome) -> Result<()> {
        self.log(format_args!("game over: {outcome}"))
    }
}
