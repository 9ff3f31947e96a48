//! Configuration file for the `landung` binary.
//!
//! ```toml
//! log_filter = "info"
//!
//! [tournament]
//! games = 20
//! contender = 3
//! opponent = 0
//! max_turns = 200
//! seed = 42
//!
//! [watch]
//! first = 2
//! second = 1
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use crate::search::Difficulty;
use crate::tournament::TournamentConfig;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Tournament and ladder settings.
    #[serde(default)]
    tournament: TournamentConfig,

    /// Settings for watching a single computer game.
    #[serde(default)]
    watch: WatchConfig,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            tournament: TournamentConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

/// Settings for a single observed computer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Level of the first competitor.
    #[serde(default = "default_watch_first")]
    first: Difficulty,

    /// Level of the second competitor.
    #[serde(default = "default_watch_second")]
    second: Difficulty,

    /// Turn index at which the game is drawn.
    #[serde(default = "default_watch_max_turns")]
    max_turns: u32,
}

fn default_watch_first() -> Difficulty {
    Difficulty::Medium
}

fn default_watch_second() -> Difficulty {
    Difficulty::Easy
}

fn default_watch_max_turns() -> u32 {
    200
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            first: default_watch_first(),
            second: default_watch_second(),
            max_turns: default_watch_max_turns(),
        }
    }
}

impl WatchConfig {
    /// Creates watch settings for two levels.
    pub fn new(first: Difficulty, second: Difficulty, max_turns: u32) -> Self {
        Self {
            first,
            second,
            max_turns,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.tournament.validate()?;

        info!(
            contender = %config.tournament.contender(),
            opponent = %config.tournament.opponent(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
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
