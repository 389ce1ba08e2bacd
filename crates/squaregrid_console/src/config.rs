//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use squaregrid_tictactoe::Mark;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest accepted board side.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 16;

/// Where a player's moves come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlayerKind {
    /// Typed in at the console.
    #[default]
    Console,
    /// Read from the `moves` list.
    Scripted,
    /// First empty cell, row by row.
    FirstAvailable,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,

    /// Mark placed by this player.
    mark: Mark,

    /// Move source.
    #[serde(default)]
    kind: PlayerKind,

    /// `[row, col]` pairs for scripted players.
    #[serde(default)]
    moves: Vec<[usize; 2]>,
}

impl PlayerConfig {
    /// Creates a player entry with no scripted moves.
    #[instrument(skip(name), fields(player = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, kind: PlayerKind) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
            kind,
            moves: Vec::new(),
        }
    }

    /// Sets the scripted moves.
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = [usize; 2]>) -> Self {
        self.moves = moves.into_iter().collect();
        self
    }
}

/// Full game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side. Prompted for at startup when absent.
    #[serde(default)]
    board_size: Option<usize>,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<PlayerConfig>,

    /// Text printed before every notification.
    #[serde(default = "default_prefix")]
    notifier_prefix: String,

    /// Print the board before every turn.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

#[instrument]
fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig::new("Dhiraj", Mark::X, PlayerKind::Console),
        PlayerConfig::new("Suraj", Mark::X.opponent(), PlayerKind::Console),
    ]
}

#[instrument]
fn default_prefix() -> String {
    "[Notification] : ".to_string()
}

#[instrument]
fn default_show_board() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: None,
            players: default_players(),
            notifier_prefix: default_prefix(),
            show_board: default_show_board(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks sizes and players.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.board_size {
            validate_board_size(size)?;
        }
        if self.players.len() < 2 {
            return Err(ConfigError::new(format!(
                "At least 2 players are required, got {}",
                self.players.len()
            )));
        }
        if let Some(player) = self.players.iter().find(|p| p.name.trim().is_empty()) {
            return Err(ConfigError::new(format!(
                "Player names must not be empty ({} player)",
                player.mark
            )));
        }
        Ok(())
    }
}

/// Checks `size` against [`MIN_BOARD_SIZE`] and [`MAX_BOARD_SIZE`].
#[track_caller]
pub fn validate_board_size(size: usize) -> Result<usize, ConfigError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(ConfigError::new(format!(
            "Board size must be between {} and {}, got {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
        )))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
