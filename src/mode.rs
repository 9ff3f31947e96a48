//! Game mode selection.

use crate::games::landung::Action;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::search::Difficulty;
use std::sync::mpsc::Sender;

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans.
    HumanVsHuman,
    /// A human moving first against the computer.
    HumanVsComputer(Difficulty),
    /// Two computers, as used by the tournament.
    ComputerVsComputer {
        /// Level of the first competitor.
        first: Difficulty,
        /// Level of the second competitor.
        second: Difficulty,
    },
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> String {
        match self {
            GameMode::HumanVsHuman => "Human vs Human".to_string(),
            GameMode::HumanVsComputer(level) => format!("Human vs Computer ({})", level),
            GameMode::ComputerVsComputer { first, second } => {
                format!("Computer ({}) vs Computer ({})", first, second)
            }
        }
    }

    /// Builds both players in seat order, plus the senders for human seats.
    pub fn build(self) -> ([Box<dyn Player>; 2], HumanInputs) {
        let mut inputs = HumanInputs::default();
        let players: [Box<dyn Player>; 2] = match self {
            GameMode::HumanVsHuman => {
                let (first, first_tx) = HumanPlayer::channel("Player 1");
                let (second, second_tx) = HumanPlayer::channel("Player 2");
                inputs.first = Some(first_tx);
                inputs.second = Some(second_tx);
                [Box::new(first), Box::new(second)]
            }
            GameMode::HumanVsComputer(level) => {
                let (human, tx) = HumanPlayer::channel("Human");
                inputs.first = Some(tx);
                [Box::new(human), Box::new(ComputerPlayer::new(level))]
            }
            GameMode::ComputerVsComputer { first, second } => [
                Box::new(ComputerPlayer::new(first)),
                Box::new(ComputerPlayer::new(second)),
            ],
        };
        (players, inputs)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsComputer(Difficulty::default())
    }
}

/// Senders feeding the human seats of a game built from a [`GameMode`].
#[derive(Debug, Default)]
pub struct HumanInputs {
    /// Input for the first seat, if human.
    pub first: Option<Sender<Action>>,
    /// Input for the second seat, if human.
    pub second: Option<Sender<Action>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_seats_get_inputs() {
        let (players, inputs) = GameMode::HumanVsComputer(Difficulty::Easy).build();
        assert!(inputs.first.is_some());
        assert!(inputs.second.is_none());
        assert!(!players[0].is_automated());
        assert!(players[1].is_automated());
    }

    #[test]
    fn test_computer_mode_is_fully_automated() {
        let mode = GameMode::ComputerVsComputer {
            first: Difficulty::Noob,
            second: Difficulty::Klaus,
        };
        let (players, inputs) = mode.build();
        assert!(players.iter().all(|p| p.is_automated()));
        assert!(inputs.first.is_none() && inputs.second.is_none());
        assert_eq!(mode.name(), "Computer (noob) vs Computer (klaus)");
    }
}
