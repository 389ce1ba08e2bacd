//! Console front end for squaregrid tic-tac-toe.
//!
//! Reads configuration, prompts for the board size when needed, and runs
//! one game with interactive, scripted, or first-available players.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod notifier;

pub use app::{build_players, prompt_board_size, run_game};
pub use cli::Cli;
pub use config::{
    ConfigError, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, PlayerConfig, PlayerKind,
    validate_board_size,
};
pub use notifier::ConsoleNotifier;
