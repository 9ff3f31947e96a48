//! Full action legality and candidate enumeration.
//!
//! [`validate`] layers board-dependent checks (reserve, occupancy,
//! ownership, movement geometry) on top of the turn-phase rules.
//! [`legal_actions`] enumerates exactly the actions `validate` accepts, in a
//! fixed order the search engine relies on for deterministic tie-breaks.

use super::geometry::{landings, validate_travel};
use super::phase::validate_phase;
use super::super::{Action, Board, Competitor, Coordinate, Direction, Rejection, Stone};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Decides whether `competitor` may take `action` on `board` at `turn`.
///
/// Order of checks: turn phase, bounds, reserve, occupancy, ownership,
/// movement geometry. Override actions skip the phase, ownership and
/// geometry checks; bounds, reserve and occupancy always apply because they
/// protect the board and reserve invariants. Never mutates its inputs.
#[instrument(level = "debug", skip(board), fields(action = %action))]
pub fn validate(
    board: &Board,
    competitor: &Competitor,
    turn: u32,
    action: &Action,
) -> Result<(), Rejection> {
    validate_phase(turn, action, competitor.reserve())?;

    if action.kind.placement().is_some() && competitor.reserve() == 0 {
        return Err(Rejection::ReserveExhausted);
    }

    let mut after_travel = board.clone();
    if let Some((from, to)) = action.kind.travel() {
        let owner = board.stone_at(from).ok_or(Rejection::SourceEmpty { from })?;
        if action.override_rules {
            if !board.is_empty(to) {
                return Err(Rejection::DestinationOccupied { at: to });
            }
        } else {
            if owner != competitor.stone() {
                return Err(Rejection::NotOwnStone { from });
            }
            validate_travel(board, from, to)?;
        }
        after_travel
            .relocate(from, to)
            .map_err(|_| Rejection::SourceEmpty { from })?;
    }

    if let Some(at) = action.kind.placement() {
        if !after_travel.is_empty(at) {
            return Err(Rejection::DestinationOccupied { at });
        }
    }

    Ok(())
}

/// Every rule-abiding action `competitor` may take at `turn`.
///
/// Order: places row-major; move-and-places by source (row-major), direction,
/// distance, then placement cell (row-major); removes by source, direction,
/// distance.
#[instrument(level = "debug", skip(board))]
pub fn legal_actions(board: &Board, competitor: &Competitor, turn: u32) -> Vec<Action> {
    let actor = competitor.stone();
    let reserve = competitor.reserve();
    let mut actions = Vec::new();

    let places = reserve > 0 && matches!(turn, 0 | 1 | 3);
    let moves_and_places = reserve > 0 && turn >= 2;
    let removes = reserve == 0 && turn >= 2 && turn != 3;

    if places {
        actions.extend(
            board
                .empty_cells()
                .into_iter()
                .map(|to| Action::place(actor, to)),
        );
    }

    if moves_and_places || removes {
        for (from, to) in travels(board, competitor) {
            if removes {
                actions.push(Action::remove(actor, from, to));
                continue;
            }
            let mut after = board.clone();
            if after.relocate(from, to).is_err() {
                continue;
            }
            actions.extend(
                after
                    .empty_cells()
                    .into_iter()
                    .map(|place_to| Action::move_and_place(actor, from, to, place_to)),
            );
        }
    }

    actions
}

/// True when `competitor` has at least one legal action at `turn`.
pub fn has_legal_action(board: &Board, competitor: &Competitor, turn: u32) -> bool {
    let reserve = competitor.reserve();
    if reserve > 0 && matches!(turn, 0 | 1 | 3) {
        return !board.empty_cells().is_empty();
    }
    if turn < 2 || turn == 3 {
        return false;
    }
    // A move-and-place always has a free cell to fill: the vacated source.
    !travels(board, competitor).is_empty()
}

/// Every geometry-legal relocation of an own stone.
fn travels(board: &Board, competitor: &Competitor) -> Vec<(Coordinate, Coordinate)> {
    board
        .stones_of(competitor.stone())
        .into_iter()
        .flat_map(|from| {
            Direction::iter().flat_map(move |direction| {
                landings(board, from, direction)
                    .into_iter()
                    .map(move |to| (from, to))
            })
        })
        .collect()
}

/// Number of geometry-legal relocations, used as a mobility measure.
pub fn mobility(board: &Board, stone: Stone) -> usize {
    board
        .stones_of(stone)
        .into_iter()
        .map(|from| {
            Direction::iter()
                .map(|direction| landings(board, from, direction).len())
                .sum::<usize>()
        })
        .sum()
}
