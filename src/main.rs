//! Ballerburg - Entry Point
//!
//! Reads one "angle velocity" line per turn from stdin and plays the duel on
//! stdout. Logs go to stderr so the transcript stays clean.

use std::io::{self, Write};
use std::path::PathBuf;

use ballerburg::core::config::MatchConfig;
use ballerburg::core::error::Result;
use ballerburg::game::{LineSource, Match};
use clap::Parser;

/// Two-player artillery duel
#[derive(Parser, Debug)]
#[command(name = "ballerburg")]
#[command(about = "Two castles take turns firing at each other until one falls")]
struct Args {
    /// Match settings (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text, or json to append a match summary
    #[arg(long, default_value = "text")]
    format: String,

    /// Log every shot's physics to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading match config from {:?}", path);
            MatchConfig::load(path)?
        }
        None => MatchConfig::default(),
    };

    let mut game = Match::new(&config)?;

    let stdin = io::stdin();
    let mut source = LineSource::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = game.run(&mut source, &mut out)?;

    match args.format.as_str() {
        "json" => {
            let report = game.report(&outcome);
            writeln!(out, "{}", report.to_json()?)?;
        }
        "text" => {}
        other => tracing::warn!("Unknown output format {:?}, summary skipped", other),
    }

    Ok(())
}
