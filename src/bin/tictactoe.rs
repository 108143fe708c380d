//! Tic-Tac-Toe with a time machine, in the terminal
//!
//! - `play` runs an interactive game on stdin/stdout
//! - `replay` applies a script of moves and jumps and prints the final view

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with move history and time travel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(tictactoe_time_machine::cli::commands::play::PlayArgs),

    /// Replay a script of actions and print the final view
    Replay(tictactoe_time_machine::cli::commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe_time_machine::cli::commands::play::execute(args),
        Commands::Replay(args) => tictactoe_time_machine::cli::commands::replay::execute(args),
    }
}
