//! Alternating turn invariant: first, second, first, second, ...

use super::super::{GameInProgress, Stone};
use super::Invariant;

/// Invariant: competitors alternate and the turn index counts the history.
///
/// The action recorded at turn `t` was taken by the stone due at `t`, and the
/// turn index equals the origin turn plus the number of recorded actions.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let origin = game.origin().turn();
        let counted = origin as usize + game.history().len() == game.turn() as usize;
        counted
            && game
                .history()
                .iter()
                .zip(origin..)
                .all(|(action, turn)| action.actor == Stone::to_move_at(turn))
    }

    fn description() -> &'static str {
        "Competitors alternate turns and the turn index counts applied actions"
    }
}
