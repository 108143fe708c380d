//! Adapters implementing domain ports.
//!
//! Adapters depend on the ports module, not the other way around.

pub mod log_observer;
pub mod recording_observer;

pub use log_observer::LogObserver;
pub use recording_observer::{EngineEvent, RecordingObserver};
