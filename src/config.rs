//! Game configuration loaded from TOML.

use crate::games::xo::{MIN_SIZE, Marks};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length for the first game. Clamped to the minimum on start.
    #[serde(default = "default_size")]
    size: usize,

    /// Symbol drawn for Player 1.
    #[serde(default = "default_player_one_symbol")]
    player_one_symbol: String,

    /// Symbol drawn for Player 2.
    #[serde(default = "default_player_two_symbol")]
    player_two_symbol: String,

    /// Symbol drawn for unclaimed cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Start a new game at the same size once a game ends.
    #[serde(default = "default_auto_restart")]
    auto_restart: bool,
}

fn default_size() -> usize {
    MIN_SIZE
}

fn default_player_one_symbol() -> String {
    "X".to_string()
}

fn default_player_two_symbol() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

fn default_auto_restart() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            player_one_symbol: default_player_one_symbol(),
            player_two_symbol: default_player_two_symbol(),
            empty_symbol: default_empty_symbol(),
            auto_restart: default_auto_restart(),
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

        let config = Self::from_toml(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Symbols for text rendering.
    pub fn marks(&self) -> Marks {
        Marks::new(
            self.player_one_symbol.as_str(),
            self.player_two_symbol.as_str(),
            self.empty_symbol.as_str(),
        )
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
