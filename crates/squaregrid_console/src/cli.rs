//! Command-line interface for squaregrid.

use clap::Parser;

/// Squaregrid - tic-tac-toe on an N-by-N board
#[derive(Parser, Debug)]
#[command(name = "squaregrid")]
#[command(about = "Play tic-tac-toe on an N-by-N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file (used only if it exists)
    #[arg(short, long, default_value = "squaregrid.toml")]
    pub config: std::path::PathBuf,

    /// Board size; overrides the config file and skips the size prompt
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Only print the board when the game ends
    #[arg(long)]
    pub no_board: bool,
}
