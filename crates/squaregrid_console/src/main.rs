//! Squaregrid - console tic-tac-toe on an N-by-N board.

use anyhow::Result;
use clap::Parser;
use squaregrid_console::{Cli, GameConfig, run_game, validate_board_size};
use squaregrid_tictactoe::Console;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(size) = cli.size {
        config = config.with_board_size(Some(validate_board_size(size)?));
    }
    if cli.no_board {
        config = config.with_show_board(false);
    }
    debug!(?config, "Effective configuration");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let outcome = run_game(&config, console)?;
    info!(verdict = ?outcome.verdict(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never mix with prompts on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
