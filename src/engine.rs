//! Game engine: snapshot history, cursor navigation and the action reducer

pub mod action;
pub mod state;

pub use action::{Action, parse_script, update};
pub use state::GameState;
