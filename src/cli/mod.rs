//! CLI infrastructure for the tic-tac-toe time machine
//!
//! The terminal stands in for the browser rendering surface: each command
//! drives a [`Session`](crate::app::Session) and prints its views.

pub mod commands;
pub mod config;
pub mod output;
