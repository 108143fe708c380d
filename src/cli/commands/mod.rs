//! CLI subcommands

pub mod play;
pub mod replay;
