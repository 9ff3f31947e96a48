//! Self-play tournaments between computer players.
//!
//! A tournament plays a fixed number of games with the contender seated
//! first, then the same number with the opponent seated first, and counts
//! the results per seating. Games run one after another; each has its own
//! board and players.

use crate::config::ConfigError;
use crate::games::landung::Stone;
use crate::orchestrator::{Game, GameError};
use crate::players::ComputerPlayer;
use crate::search::Difficulty;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Parameters of one tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Games per seating.
    #[serde(default = "default_games")]
    games: u32,

    /// Level under evaluation.
    #[serde(default = "default_contender")]
    contender: Difficulty,

    /// Fixed reference level.
    #[serde(default = "default_opponent")]
    opponent: Difficulty,

    /// Turn index at which a game is scored as a draw.
    #[serde(default = "default_max_turns")]
    max_turns: u32,

    /// Base seed for the random level.
    #[serde(default)]
    seed: u64,
}

fn default_games() -> u32 {
    10
}

fn default_contender() -> Difficulty {
    Difficulty::Medium
}

fn default_opponent() -> Difficulty {
    Difficulty::Noob
}

fn default_max_turns() -> u32 {
    200
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::new(default_contender(), default_opponent())
    }
}

impl TournamentConfig {
    /// Creates a configuration with default game count, turn limit and seed.
    pub fn new(contender: Difficulty, opponent: Difficulty) -> Self {
        Self {
            games: default_games(),
            contender,
            opponent,
            max_turns: default_max_turns(),
            seed: 0,
        }
    }

    /// Sets the number of games per seating.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Sets the contender level.
    pub fn with_contender(mut self, contender: Difficulty) -> Self {
        self.contender = contender;
        self
    }

    /// Sets the opponent level.
    pub fn with_opponent(mut self, opponent: Difficulty) -> Self {
        self.opponent = opponent;
        self
    }

    /// Sets the draw turn limit.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ConfigError::new(format!("Failed to parse tournament config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&text)
    }

    /// Rejects configurations that cannot produce a result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::new("max_turns must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Results for one seating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatingResult {
    /// Games the contender won.
    contender_wins: u32,
    /// Games the opponent won.
    opponent_wins: u32,
    /// Games that hit the turn limit.
    draws: u32,
    /// Turns played over all games.
    turns: u64,
}

impl SeatingResult {
    /// Games recorded.
    pub fn games(&self) -> u32 {
        self.contender_wins + self.opponent_wins + self.draws
    }
}

/// Aggregated tournament results.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Level under evaluation.
    contender: Difficulty,
    /// Reference level.
    opponent: Difficulty,
    /// Games with the contender moving first.
    contender_first: SeatingResult,
    /// Games with the opponent moving first.
    opponent_first: SeatingResult,
    /// Wall time in milliseconds.
    elapsed_ms: u64,
}

impl TournamentReport {
    /// Games played over both seatings.
    pub fn games(&self) -> u32 {
        self.contender_first.games() + self.opponent_first.games()
    }

    /// Contender wins over both seatings.
    pub fn contender_wins(&self) -> u32 {
        self.contender_first.contender_wins + self.opponent_first.contender_wins
    }

    /// Share of all games the contender won, 0.0 when nothing was played.
    pub fn contender_win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => f64::from(self.contender_wins()) / f64::from(games),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} (level {}) vs {} (level {}): {:.1}% over {} games in {} ms",
            self.contender,
            self.contender.level(),
            self.opponent,
            self.opponent.level(),
            self.contender_win_rate() * 100.0,
            self.games(),
            self.elapsed_ms
        )?;
        for (label, seating) in [
            ("contender first", &self.contender_first),
            ("opponent first", &self.opponent_first),
        ] {
            writeln!(
                f,
                "  {:<16} won {:>4}  lost {:>4}  drawn {:>4}",
                label, seating.contender_wins, seating.opponent_wins, seating.draws
            )?;
        }
        Ok(())
    }
}

/// Which seat the contender takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seating {
    ContenderFirst,
    OpponentFirst,
}

/// Drives sequential self-play games and aggregates the results.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    /// Creates a tournament.
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Plays every game of both seatings.
    ///
    /// # Errors
    ///
    /// Aborts on the first [`GameError`], which can only come from a defect
    /// in an automated player.
    #[instrument(skip(self), fields(
        contender = %self.config.contender,
        opponent = %self.config.opponent,
        games = self.config.games,
    ))]
    pub fn run(&self) -> Result<TournamentReport, GameError> {
        let started = Instant::now();
        info!("Starting tournament");

        let contender_first = self.play_seating(Seating::ContenderFirst)?;
        let opponent_first = self.play_seating(Seating::OpponentFirst)?;

        let report = TournamentReport {
            contender: self.config.contender,
            opponent: self.config.opponent,
            contender_first,
            opponent_first,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            win_rate = report.contender_win_rate(),
            elapsed_ms = report.elapsed_ms,
            "Tournament finished"
        );
        Ok(report)
    }

    /// Runs every level from 0 to 4 as contender against the configured
    /// opponent, weakest first.
    #[instrument(skip(config), fields(opponent = %config.opponent))]
    pub fn ladder(config: &TournamentConfig) -> Result<Vec<TournamentReport>, GameError> {
        Difficulty::all()
            .map(|level| Tournament::new(config.with_contender(level)).run())
            .collect()
    }

    fn play_seating(&self, seating: Seating) -> Result<SeatingResult, GameError> {
        let mut result = SeatingResult::default();
        for index in 0..self.config.games {
            let (contender_seed, opponent_seed) = self.seeds(seating, index);
            let contender = ComputerPlayer::with_seed(self.config.contender, contender_seed)
                .named(format!("Contender ({})", self.config.contender));
            let opponent = ComputerPlayer::with_seed(self.config.opponent, opponent_seed)
                .named(format!("Opponent ({})", self.config.opponent));

            let (mut game, contender_stone) = match seating {
                Seating::ContenderFirst => (
                    Game::with_players(Box::new(contender), Box::new(opponent)),
                    Stone::First,
                ),
                Seating::OpponentFirst => (
                    Game::with_players(Box::new(opponent), Box::new(contender)),
                    Stone::Second,
                ),
            };
            game = game.with_max_turns(self.config.max_turns);

            let outcome = game.run(false)?;
            match outcome.winner() {
                Some(stone) if stone == contender_stone => result.contender_wins += 1,
                Some(_) => result.opponent_wins += 1,
                None => result.draws += 1,
            }
            let turns = game.finished().map_or(0, |done| done.turn());
            result.turns += u64::from(turns);

            debug!(?seating, index, %outcome, turns, "Game recorded");
            let played = index + 1;
            if played % 10 == 0 || played == self.config.games {
                info!(
                    ?seating,
                    played,
                    of = self.config.games,
                    wins = result.contender_wins,
                    "Tournament progress"
                );
            }
        }
        Ok(result)
    }

    /// Per-game seeds for both engines, derived from the base seed.
    fn seeds(&self, seating: Seating, index: u32) -> (u64, u64) {
        let offset = match seating {
            Seating::ContenderFirst => 0,
            Seating::OpponentFirst => u64::from(self.config.games),
        };
        let game = self.config.seed.wrapping_add(offset + u64::from(index));
        let mixed = game.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        (mixed, mixed ^ 0xD1B5_4A32_D192_ED03)
    }
}
