//! Shared configuration types for CLI commands

use clap::Args;

use crate::app::{OutputFormat, SessionConfig};

/// Options common to every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// View output format (`text` or `json`)
    #[arg(long, short = 'f', default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print views as JSON (same as `--format json`)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Log engine events to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CommonArgs {
    /// Output format after applying `--json`
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

impl From<&CommonArgs> for SessionConfig {
    fn from(args: &CommonArgs) -> Self {
        SessionConfig::new()
            .with_output(args.output_format())
            .with_verbose(args.verbose)
    }
}
