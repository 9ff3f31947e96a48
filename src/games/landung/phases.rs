//! Outcome types for a finished game.

use super::Stone;
use serde::{Deserialize, Serialize};

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner aligned four stones.
    FourInARow,
    /// The loser had no legal action on their turn.
    OpponentBlocked,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A competitor won.
    Winner {
        /// The winning stone.
        stone: Stone,
        /// How the game was decided.
        reason: WinReason,
    },
    /// The turn limit was reached without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Winner { stone, .. } => Some(*stone),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner {
                stone,
                reason: WinReason::FourInARow,
            } => write!(f, "{} player wins with four in a row", stone),
            Outcome::Winner {
                stone,
                reason: WinReason::OpponentBlocked,
            } => write!(f, "{} player wins, opponent has no legal action", stone),
            Outcome::Draw => write!(f, "Draw by turn limit"),
        }
    }
}
