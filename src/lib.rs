//! Tic-Tac-Toe with move history and time travel
//!
//! This crate provides:
//! - Board snapshots, winning-line detection and outcome evaluation
//! - A game engine keeping the full move history with a cursor and
//!   high-water mark, so any earlier position can be revisited
//! - A pure `render` step producing a framework-free view of the game
//! - A session layer with pluggable observers and a terminal front-end

pub mod adapters;
pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod ports;
pub mod render;
pub mod tictactoe;

pub use engine::{Action, GameState, update};
pub use error::{Error, Result};
pub use render::{View, render};
pub use tictactoe::{Cell, Outcome, Player, Snapshot, evaluate};
