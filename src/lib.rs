//! Landung library: rules, computer opponent and self-play harness
//!
//! Landung is played on a 5x5 board. Each competitor owns nine stones,
//! places them during the opening turns and later has to move one stone at
//! least two cells in a straight line before placing the next. Four stones
//! in a row, column or diagonal win; so does leaving the opponent without a
//! legal action.
//!
//! # Architecture
//!
//! - **Games**: typestate rules core (`GameSetup` → `GameInProgress` → `GameFinished`)
//! - **Search**: negamax engine with five difficulty levels
//! - **Players**: human, computer and scripted implementations of [`Player`]
//! - **Orchestrator**: the game loop driving two players
//! - **Tournament**: sequential self-play with per-seating statistics
//!
//! # Example
//!
//! ```no_run
//! use landung::{Difficulty, Game, GameMode};
//!
//! let (game, _inputs) = Game::new(GameMode::ComputerVsComputer {
//!     first: Difficulty::Hard,
//!     second: Difficulty::Easy,
//! });
//! let mut game = game.with_max_turns(200);
//! let outcome = game.run(true)?;
//! println!("{outcome}: {:?}", game.winner_name());
//! # Ok::<(), landung::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod mode;
mod orchestrator;
mod players;
mod search;
mod tournament;

pub mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, WatchConfig};

// Crate-level exports - Game loop
pub use mode::{GameMode, HumanInputs};
pub use orchestrator::{Game, GameError, GameEvent};

// Crate-level exports - Players
pub use players::{ComputerPlayer, Feedback, HumanPlayer, Player, PlayerError, ScriptedPlayer};

// Crate-level exports - Search
pub use search::{
    Decision, Difficulty, Heuristic, HeuristicKind, LineHeuristic, SearchEngine, SearchError,
    Strategy, ThreatHeuristic, WIN_SCORE,
};

// Crate-level exports - Tournament
pub use tournament::{SeatingResult, Tournament, TournamentConfig, TournamentReport};

// Crate-level exports - Game types (Landung)
pub use games::landung::{
    Action, ActionError, ActionKind, Board, Competitor, Coordinate, Direction, GameFinished,
    GameInProgress, GameResult, GameSetup, GameSnapshot, Outcome, Rejection, SnapshotError,
    Square, Stone, WinReason, BOARD_SIZE, RESERVE,
};
