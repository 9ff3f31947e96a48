//! Serializable game snapshot: {Board, Players, TurnIndex}.
//!
//! Typestate phases are not serialized directly; a surrounding tool that
//! wants to save a running game captures a snapshot and later resumes it
//! with [`GameInProgress::restore`](super::GameInProgress::restore).

use super::error::SnapshotError;
use super::{Board, Competitor};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything needed to resume a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: Board,
    players: [Competitor; 2],
    turn: u32,
}

impl GameSnapshot {
    /// Creates a snapshot.
    pub fn new(board: Board, players: [Competitor; 2], turn: u32) -> Self {
        Self {
            board,
            players,
            turn,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both competitors in seating order.
    pub fn players(&self) -> &[Competitor; 2] {
        &self.players
    }

    /// The turn index.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Encodes the snapshot as JSON.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Action, Coordinate, GameInProgress, Stone};

    #[test]
    fn test_json_preserves_position() {
        let game = GameInProgress::replay(&[
            Action::place(Stone::First, Coordinate::new(1, 3)),
            Action::place(Stone::Second, Coordinate::new(3, 1)),
        ])
        .unwrap()
        .in_progress()
        .unwrap();
        let json = game.snapshot().to_json().unwrap();
        let decoded = GameSnapshot::from_json(&json).unwrap();
        assert_eq!(decoded, game.snapshot());
        assert_eq!(decoded.turn(), 2);
    }

    #[test]
    fn test_garbage_is_a_json_error() {
        assert!(matches!(
            GameSnapshot::from_json("{not json"),
            Err(SnapshotError::Json(_))
        ));
    }
}
