//! Play command - interactive game on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{Session, SessionConfig},
    cli::{
        config::CommonArgs,
        output::{PLAY_HELP, write_kv, write_section, write_view},
    },
    engine::Action,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = Session::new(SessionConfig::from(&args.common));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

/// Read one command per line until `quit` or end of input.
///
/// Lines that do not parse are reported and skipped; the game goes on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    write_view(&mut out, session)?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        match command.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                writeln!(out, "{PLAY_HELP}")?;
                continue;
            }
            "show" => {
                write_view(&mut out, session)?;
                continue;
            }
            _ => {}
        }

        match command.parse::<Action>() {
            Ok(action) => {
                session.dispatch(action)?;
                write_view(&mut out, session)?;
            }
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }

    let state = session.state();
    write_section(&mut out, "Session summary")?;
    write_kv(&mut out, "Moves", &state.history().len().saturating_sub(1).to_string())?;
    write_kv(&mut out, "Outcome", &state.outcome().to_string())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(input: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        run(&mut session, input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_until_quit() {
        let (session, out) = play("0\n3\nmove 1\n4\n2\nquit\n8\n");
        assert_eq!(session.state().history().len(), 6);
        assert!(out.contains("Winner is: X"));
        assert!(out.contains("Outcome:       X wins"));
    }

    #[test]
    fn bad_lines_are_reported() {
        let (session, out) = play("fly away\nhelp\n4\n");
        assert!(out.contains("error: invalid action 'fly away'"));
        assert!(out.contains("jump <step>"));
        assert_eq!(session.state().step_number(), 1);
    }
}
