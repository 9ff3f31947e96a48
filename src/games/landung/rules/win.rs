//! Win detection logic for Landung.

use super::super::{Board, Coordinate, Direction, Stone, BOARD_SIZE};
use std::sync::OnceLock;
use tracing::instrument;

/// Stones in a winning line.
pub const LINE_LENGTH: usize = 4;

/// The four axis families scanned, in scan order.
pub const AXES: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::NorthEast,
    Direction::SouthEast,
];

/// Every length-4 window fully inside the board, in scan order:
/// horizontal, vertical, `/` diagonal, `\` diagonal; row-major by start cell.
pub fn windows() -> &'static [[Coordinate; LINE_LENGTH]] {
    static WINDOWS: OnceLock<Vec<[Coordinate; LINE_LENGTH]>> = OnceLock::new();
    WINDOWS.get_or_init(|| {
        AXES.into_iter()
            .flat_map(|axis| {
                Coordinate::all().filter_map(move |start| {
                    let last = start.step(axis, LINE_LENGTH as i32 - 1);
                    last.in_bounds().then(|| {
                        let mut cells = [start; LINE_LENGTH];
                        for (i, cell) in cells.iter_mut().enumerate() {
                            *cell = start.step(axis, i as i32);
                        }
                        cells
                    })
                })
            })
            .collect()
    })
}

/// Number of windows per board, for sizing.
pub const WINDOW_COUNT: usize = {
    let n = BOARD_SIZE;
    let span = n - LINE_LENGTH + 1;
    2 * n * span + 2 * span * span
};

/// Owner of the window if all four cells hold stones of one competitor.
pub fn window_owner(board: &Board, window: &[Coordinate; LINE_LENGTH]) -> Option<Stone> {
    let first = board.stone_at(window[0])?;
    window[1..]
        .iter()
        .all(|c| board.stone_at(*c) == Some(first))
        .then_some(first)
}

/// Returns the owner of the first four-in-a-row found, scanning in the
/// fixed order of [`windows`].
#[instrument(level = "debug", skip(board))]
pub fn find_winner(board: &Board) -> Option<Stone> {
    windows().iter().find_map(|w| window_owner(board, w))
}

/// Like [`find_winner`], but when both competitors hold a four-in-a-row
/// the mover's own line takes precedence.
#[instrument(level = "debug", skip(board))]
pub fn find_winner_for_mover(board: &Board, mover: Stone) -> Option<Stone> {
    if has_line(board, mover) {
        Some(mover)
    } else {
        find_winner(board)
    }
}

/// True when `stone` owns at least one complete window.
pub fn has_line(board: &Board, stone: Stone) -> bool {
    windows().iter().any(|w| window_owner(board, w) == Some(stone))
}
