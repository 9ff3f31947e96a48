//! Player trait and implementations.

mod computer;
mod human;
mod scripted;

pub use computer::ComputerPlayer;
pub use human::{Feedback, HumanPlayer};
pub use scripted::ScriptedPlayer;

use crate::games::landung::{Action, GameInProgress, Rejection};
use crate::search::SearchError;
use derive_more::{Display, Error, From};

/// A source of actions for one seat at the board.
///
/// Interactive implementations may return illegal actions; the game loop
/// rejects them and asks again. Automated implementations promise to return
/// only legal actions, and the game loop aborts if one does not.
pub trait Player: Send {
    /// Chooses the next action for the competitor to move in `game`.
    fn decide_action(&mut self, game: &GameInProgress) -> Result<Action, PlayerError>;

    /// Tells the player its last action was rejected.
    fn notify_invalid_move(&mut self, _rejection: &Rejection) {}

    /// Tells the player it has won.
    fn notify_winner(&mut self) {}

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when the player guarantees legal output.
    fn is_automated(&self) -> bool;
}

/// Why a player could not produce an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum PlayerError {
    /// The input channel was closed.
    #[display("input for {} closed", _0)]
    #[from(ignore)]
    InputClosed(#[error(not(source))] String),

    /// No input arrived in time.
    #[display("input for {} timed out", _0)]
    #[from(ignore)]
    TimedOut(#[error(not(source))] String),

    /// A scripted player ran out of actions.
    #[display("script for {} exhausted", _0)]
    #[from(ignore)]
    ScriptExhausted(#[error(not(source))] String),

    /// The search engine failed.
    #[display("search failed: {}", _0)]
    Search(#[error(source)] SearchError),
}
