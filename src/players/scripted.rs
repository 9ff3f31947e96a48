//! Player replaying a fixed list of actions.

use super::{Player, PlayerError};
use crate::games::landung::{Action, GameInProgress, Rejection};
use std::collections::VecDeque;
use tracing::warn;

/// Plays a fixed action sequence, one action per request.
///
/// Counts as automated: a rejected scripted action aborts the game.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    script: VecDeque<Action>,
    rejections: Vec<Rejection>,
    won: bool,
}

impl ScriptedPlayer {
    /// Creates a player that will return `script` in order.
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
            rejections: Vec::new(),
            won: false,
        }
    }

    /// Actions not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Rejections received so far.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// True once [`Player::notify_winner`] was called.
    pub fn has_won(&self) -> bool {
        self.won
    }
}

impl Player for ScriptedPlayer {
    fn decide_action(&mut self, _game: &GameInProgress) -> Result<Action, PlayerError> {
        self.script
            .pop_front()
            .ok_or_else(|| PlayerError::ScriptExhausted(self.name.clone()))
    }

    fn notify_invalid_move(&mut self, rejection: &Rejection) {
        warn!(player = %self.name, reason = %rejection, "Scripted action rejected");
        self.rejections.push(*rejection);
    }

    fn notify_winner(&mut self) {
        self.won = true;
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
    use crate::games::landung::{Coordinate, GameSetup, Stone};

    #[test]
    fn test_plays_script_then_reports_exhaustion() {
        let action = Action::place(Stone::First, Coordinate::new(2, 2));
        let mut player = ScriptedPlayer::new("Script", [action]);
        let game = GameSetup::new().start();
        assert_eq!(player.decide_action(&game), Ok(action));
        assert_eq!(player.remaining(), 0);
        assert_eq!(
            player.decide_action(&game),
            Err(PlayerError::ScriptExhausted("Script".to_string()))
        );
    }
}
