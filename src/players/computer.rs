//! Automated player driven by the search engine.

use super::{Player, PlayerError};
use crate::games::landung::{Action, GameInProgress};
use crate::search::{Difficulty, SearchEngine};
use tracing::{debug, instrument};

/// Computer opponent at a fixed difficulty.
///
/// Only ever returns actions drawn from the legal candidate set.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    engine: SearchEngine,
}

impl ComputerPlayer {
    /// Creates a computer player named after its level.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            name: format!("Computer ({})", difficulty),
            engine: SearchEngine::new(difficulty),
        }
    }

    /// Creates a computer player with a reproducible random source.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: format!("Computer ({})", difficulty),
            engine: SearchEngine::with_seed(difficulty, seed),
        }
    }

    /// Replaces the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The level this player searches at.
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(player = %self.name, turn = game.turn()))]
    fn decide_action(&mut self, game: &GameInProgress) -> Result<Action, PlayerError> {
        let decision = self
            .engine
            .search(game.board(), game.players(), game.turn())?;
        debug!(action = %decision.action, score = decision.score, "Computer decided");
        Ok(decision.action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::GameSetup;

    #[test]
    fn test_actions_are_accepted_by_game() {
        let mut first = ComputerPlayer::with_seed(Difficulty::Noob, 1);
        let mut second = ComputerPlayer::new(Difficulty::Easy);
        let mut game = GameSetup::new().start();
        for _ in 0..8 {
            let player = if game.turn() % 2 == 0 { &mut first } else { &mut second };
            let action = player.decide_action(&game).unwrap();
            match game.apply(action).unwrap().in_progress() {
                Some(next) => game = next,
                None => return,
            }
        }
    }

    #[test]
    fn test_name_carries_level() {
        assert_eq!(ComputerPlayer::new(Difficulty::Hard).name(), "Computer (hard)");
        assert!(ComputerPlayer::new(Difficulty::Hard).is_automated());
    }
}
