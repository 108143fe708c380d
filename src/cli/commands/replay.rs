//! Replay command - apply a scripted sequence of actions

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::{Session, SessionConfig},
    cli::{config::CommonArgs, output::write_view},
    engine::parse_script,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a script of moves and jumps")]
pub struct ReplayArgs {
    /// Inline script, e.g. "0; 4; 8; jump 1; 2"
    #[arg(long, short = 's', conflicts_with = "file")]
    pub script: Option<String>,

    /// Read the script from a file (one or more actions per line)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let stdout = std::io::stdout();
    run(args, stdout.lock())
}

/// Load the script, replay it on a fresh session and write the final view
pub fn run<W: Write>(args: ReplayArgs, mut out: W) -> Result<()> {
    let script = match (&args.script, &args.file) {
        (Some(script), _) => script.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        (None, None) => bail!("either --script or --file is required"),
    };

    let actions = parse_script(&script)?;
    let mut session = Session::new(SessionConfig::from(&args.common));
    session.run(actions)?;

    write_view(&mut out, &session)?;
    out.flush()?;
    Ok(())
}
