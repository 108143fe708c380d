//! Configuration types for session creation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How a session formats views for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown output format '{s}' (expected 'text' or 'json')"),
            }),
        }
    }
}

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use tictactoe_time_machine::app::{OutputFormat, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_verbose(true)
///     .with_output(OutputFormat::Json);
/// assert!(config.verbose);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Log engine events to stderr
    pub verbose: bool,
    /// Format used by [`Session::format_view`](super::Session::format_view)
    pub output: OutputFormat,
}

impl SessionConfig {
    /// Quiet session with text output
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
