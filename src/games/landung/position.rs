//! Board coordinates and the eight straight-line directions.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// A cell address. `x` is the column (`a..e`), `y` the row (`1..5`).
///
/// Signed so that off-board input survives until the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, 0-based.
    pub x: i32,
    /// Row, 0-based.
    pub y: i32,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `0 <= x, y < BOARD_SIZE`.
    pub fn in_bounds(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    /// Every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let n = BOARD_SIZE as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Coordinate::new(x, y)))
    }

    /// The coordinate `steps` cells away in `direction`.
    pub fn step(self, direction: Direction, steps: i32) -> Coordinate {
        let (dx, dy) = direction.delta();
        Coordinate::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Label such as `c3`; off-board coordinates render as `(x,y)`.
    pub fn label(self) -> String {
        if self.in_bounds() {
            let column = (b'a' + self.x as u8) as char;
            format!("{}{}", column, self.y + 1)
        } else {
            format!("({},{})", self.x, self.y)
        }
    }

}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the eight straight-line directions a stone may travel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Increasing `y`.
    North,
    /// Increasing `x` and `y`.
    NorthEast,
    /// Increasing `x`.
    East,
    /// Increasing `x`, decreasing `y`.
    SouthEast,
    /// Decreasing `y`.
    South,
    /// Decreasing `x` and `y`.
    SouthWest,
    /// Decreasing `x`.
    West,
    /// Decreasing `x`, increasing `y`.
    NorthWest,
}

impl Direction {
    /// Unit step `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Direction and distance of a straight-line step from `from` to `to`.
    ///
    /// Returns `None` when the two cells are equal or not on a common row,
    /// column or diagonal.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<(Direction, i32)> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let distance = dx.abs().max(dy.abs());
        let unit = (dx.signum(), dy.signum());
        <Direction as strum::IntoEnumIterator>::iter()
            .find(|d| d.delta() == unit)
            .map(|d| (d, distance))
    }
}
