//! Command-line interface for the noughts terminal app.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's move policy (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between the end of a round and the automatic reset
    #[arg(long, default_value = "100")]
    pub reset_delay_ms: u64,

    /// File receiving tracing output (the terminal itself shows the game)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
