//! Movement geometry: how far and along which lines a stone may travel.

use super::super::{Board, Coordinate, Direction, Rejection};
use tracing::instrument;

/// Minimum number of cells a stone must travel.
pub const MIN_TRAVEL: i32 = 2;

/// Checks a relocation from `from` to `to` against the movement rules.
///
/// The step must run along a row, column or diagonal, cover at least
/// [`MIN_TRAVEL`] cells, cross only empty cells and land on an empty cell.
/// Assumes both coordinates are on the board.
#[instrument(level = "trace", skip(board))]
pub fn validate_travel(board: &Board, from: Coordinate, to: Coordinate) -> Result<(), Rejection> {
    let (direction, distance) = Direction::between(from, to).ok_or(Rejection::NotStraightLine)?;
    if distance < MIN_TRAVEL {
        return Err(Rejection::TooShort);
    }
    if let Some(at) = (1..distance)
        .map(|i| from.step(direction, i))
        .find(|c| !board.is_empty(*c))
    {
        return Err(Rejection::PathBlocked { at });
    }
    if !board.is_empty(to) {
        return Err(Rejection::DestinationOccupied { at: to });
    }
    Ok(())
}

/// Every landing cell reachable from `from` in `direction`, nearest first.
///
/// Stops at the first occupied cell or the board edge.
pub fn landings(board: &Board, from: Coordinate, direction: Direction) -> Vec<Coordinate> {
    let mut cells = Vec::new();
    let mut distance = 1;
    loop {
        let next = from.step(direction, distance);
        if !board.is_empty(next) {
            break;
        }
        if distance >= MIN_TRAVEL {
            cells.push(next);
        }
        distance += 1;
    }
    cells
}
