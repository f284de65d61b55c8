//! Command-line interface for strictly_xo.

use clap::Parser;
use std::path::PathBuf;

/// Strictly XO - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_xo")]
#[command(about = "Two-player N×N tic-tac-toe with K-in-a-row wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to game config file
    #[arg(short, long, default_value = "xo.toml")]
    pub config: PathBuf,

    /// Board size (overrides the config file; values below 3 become 3)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Emit snapshots and outcomes as JSON lines instead of a text grid
    #[arg(long)]
    pub json: bool,

    /// Keep a finished game on screen instead of starting a new one
    #[arg(long)]
    pub no_restart: bool,
}
