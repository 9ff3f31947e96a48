//! Human player backed by a channel.

use super::{Player, PlayerError};
use crate::games::landung::{Action, GameInProgress, Rejection};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Messages from the game loop back to whoever drives a [`HumanPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The submitted action was rejected; submit another.
    Rejected(Rejection),
    /// The game is won.
    Won,
}

/// Interactive player fed by an external input source.
///
/// Actions arrive over an [`mpsc`] channel; the front end that owns the
/// sender decides how they are produced. Submitted actions are not
/// checked here.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
    actions: Receiver<Action>,
    feedback: Option<Sender<Feedback>>,
    timeout: Option<Duration>,
}

impl HumanPlayer {
    /// Creates a human player that reads actions from `actions`.
    #[instrument(skip_all)]
    pub fn new(name: impl Into<String>, actions: Receiver<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
            feedback: None,
            timeout: None,
        }
    }

    /// Creates a human player and the sender that feeds it.
    pub fn channel(name: impl Into<String>) -> (Self, Sender<Action>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(name, rx), tx)
    }

    /// Forwards rejections and the win notice to `feedback`.
    pub fn with_feedback(mut self, feedback: Sender<Feedback>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Gives up waiting for input after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn send(&self, feedback: Feedback) {
        if let Some(tx) = &self.feedback {
            if tx.send(feedback).is_err() {
                debug!(player = %self.name, "Feedback receiver dropped");
            }
        }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip(self, game), fields(player = %self.name, turn = game.turn()))]
    fn decide_action(&mut self, game: &GameInProgress) -> Result<Action, PlayerError> {
        debug!("Waiting for input");
        let action = match self.timeout {
            None => self
                .actions
                .recv()
                .map_err(|_| PlayerError::InputClosed(self.name.clone()))?,
            Some(timeout) => self.actions.recv_timeout(timeout).map_err(|e| match e {
                RecvTimeoutError::Timeout => PlayerError::TimedOut(self.name.clone()),
                RecvTimeoutError::Disconnected => PlayerError::InputClosed(self.name.clone()),
            })?,
        };
        debug!(action = %action, "Received input");
        Ok(action)
    }

    fn notify_invalid_move(&mut self, rejection: &Rejection) {
        warn!(player = %self.name, reason = %rejection, "Action rejected");
        self.send(Feedback::Rejected(*rejection));
    }

    fn notify_winner(&mut self) {
        info!(player = %self.name, "Player won");
        self.send(Feedback::Won);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Coordinate, GameSetup, Stone};

    #[test]
    fn test_reads_actions_in_order() {
        let (mut player, tx) = HumanPlayer::channel("Alice");
        let game = GameSetup::new().start();
        let first = Action::place(Stone::First, Coordinate::new(0, 0));
        let second = Action::place(Stone::First, Coordinate::new(1, 1));
        tx.send(first).unwrap();
        tx.send(second).unwrap();
        assert_eq!(player.decide_action(&game).unwrap(), first);
        assert_eq!(player.decide_action(&game).unwrap(), second);
    }

    #[test]
    fn test_closed_channel_reports_input_closed() {
        let (mut player, tx) = HumanPlayer::channel("Alice");
        drop(tx);
        let game = GameSetup::new().start();
        assert_eq!(
            player.decide_action(&game),
            Err(PlayerError::InputClosed("Alice".to_string()))
        );
    }

    #[test]
    fn test_timeout() {
        let (player, _tx) = HumanPlayer::channel("Alice");
        let mut player = player.with_timeout(Duration::from_millis(10));
        let game = GameSetup::new().start();
        assert_eq!(
            player.decide_action(&game),
            Err(PlayerError::TimedOut("Alice".to_string()))
        );
    }

    #[test]
    fn test_feedback_forwarded() {
        let (player, _tx) = HumanPlayer::channel("Alice");
        let (feedback_tx, feedback_rx) = mpsc::channel();
        let mut player = player.with_feedback(feedback_tx);
        player.notify_invalid_move(&Rejection::TooShort);
        player.notify_winner();
        assert_eq!(feedback_rx.recv().unwrap(), Feedback::Rejected(Rejection::TooShort));
        assert_eq!(feedback_rx.recv().unwrap(), Feedback::Won);
        assert!(!player.is_automated());
    }
}
