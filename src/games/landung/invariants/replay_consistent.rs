//! Replay consistency: the board is exactly what the history produces.

use super::super::rules::execute;
use super::super::{GameInProgress, Stone};
use super::Invariant;

/// Invariant: replaying the history from the origin reproduces the board
/// and both reserves.
pub struct ReplayConsistentInvariant;

impl Invariant<GameInProgress> for ReplayConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let origin = game.origin();
        let mut board = origin.board().clone();
        let mut players = *origin.players();

        for action in game.history() {
            let competitor = &mut players[action.actor.index()];
            if execute(&mut board, competitor, &action.kind).is_err() {
                return false;
            }
        }

        board == *game.board()
            && Stone::BOTH
                .iter()
                .all(|s| players[s.index()] == *game.competitor(*s))
    }

    fn description() -> &'static str {
        "Replaying the action history reproduces the board and reserves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Action, Coordinate, GameInProgress, GameSetup, Square};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start();
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_relocations_replay() {
        let actions = [
            Action::place(Stone::First, Coordinate::new(0, 0)),
            Action::place(Stone::Second, Coordinate::new(4, 4)),
            Action::move_and_place(
                Stone::First,
                Coordinate::new(0, 0),
                Coordinate::new(2, 2),
                Coordinate::new(0, 0),
            ),
        ];
        let game = GameInProgress::replay(&actions)
            .unwrap()
            .in_progress()
            .unwrap();
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_tampered_board_violates() {
        let game = GameSetup::new().start();
        let action = Action::place(Stone::First, Coordinate::new(2, 2));
        let mut game = game.apply(action).unwrap().in_progress().unwrap();
        game.board
            .set(Coordinate::new(2, 2), Square::Occupied(Stone::Second))
            .unwrap();
        assert!(!ReplayConsistentInvariant::holds(&game));
    }
}
