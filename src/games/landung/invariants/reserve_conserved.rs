//! Reserve conservation: no competitor ever has more than its starting stones.

use super::super::{GameInProgress, Stone, RESERVE};
use super::Invariant;

/// Invariant: `reserve + stones on board <= RESERVE` for both competitors.
///
/// Placing moves a stone from the reserve to the board and relocating keeps
/// the count, so a game started from [`GameSetup`](super::super::GameSetup)
/// stays at exactly `RESERVE`. Restored positions may hold fewer stones.
pub struct ReserveConservedInvariant;

impl Invariant<GameInProgress> for ReserveConservedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        Stone::BOTH.iter().all(|&stone| {
            let reserve = game.competitor(stone).reserve() as usize;
            reserve + game.board().count(stone) <= RESERVE as usize
        })
    }

    fn description() -> &'static str {
        "Each competitor's reserve plus stones on board never exceeds the starting reserve"
    }
}
