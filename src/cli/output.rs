//! Output formatting helpers for CLI commands

use std::io::Write;

use crate::{Result, app::Session};

/// Write a section header
pub fn write_section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))?;
    Ok(())
}

/// Write a key-value pair
pub fn write_kv<W: Write>(out: &mut W, key: &str, value: &str) -> Result<()> {
    writeln!(out, "  {:14} {}", format!("{}:", key), value)?;
    Ok(())
}

/// Write the session's view in its configured format
pub fn write_view<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    writeln!(out, "{}", session.format_view()?)?;
    Ok(())
}

/// Help text for interactive play
pub const PLAY_HELP: &str = "\
Commands:
  <cell> | move <cell>   place the next mark on cell 0-8
  jump <step>            travel to a step of the history
  new                    start a new game
  show                   print the board again
  help                   show this help
  quit                   leave";
