//! Application layer: session wiring and configuration.
//!
//! ```text
//!   Action ──► Session::dispatch ──► GameState::try_* ──► next GameState
//!                    │                                          │
//!                    ▼                                          ▼
//!              Observer hooks                           render() ──► View
//! ```
//!
//! The session owns the only mutable slot; engine operations themselves
//! are pure.

pub mod config;
pub mod session;

pub use config::{OutputFormat, SessionConfig};
pub use session::Session;
