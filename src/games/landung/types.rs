//! Core domain types for Landung.

use super::position::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Stones each competitor starts with in reserve.
pub const RESERVE: u8 = 9;

/// Owner of a stone, one of the two competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stone {
    /// Moves at even turn indices.
    First,
    /// Moves at odd turn indices.
    Second,
}

impl Stone {
    /// Both stones in seating order.
    pub const BOTH: [Stone; 2] = [Stone::First, Stone::Second];

    /// Returns the opponent.
    pub fn opponent(self) -> Self {
        match self {
            Stone::First => Stone::Second,
            Stone::Second => Stone::First,
        }
    }

    /// Seat index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Stone::First => 0,
            Stone::Second => 1,
        }
    }

    /// The stone due to act at the given turn index.
    pub fn to_move_at(turn: u32) -> Self {
        if turn % 2 == 0 { Stone::First } else { Stone::Second }
    }

    /// Single-character symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Stone::First => 'X',
            Stone::Second => 'O',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::First => write!(f, "first"),
            Stone::Second => write!(f, "second"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a stone.
    Occupied(Stone),
}

impl Square {
    /// Returns the owner if occupied.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Square::Empty => None,
            Square::Occupied(stone) => Some(stone),
        }
    }
}

/// 5x5 Landung board.
///
/// Cells are addressed by [`Coordinate`]; every accessor is bounds-checked,
/// so an off-board coordinate reads as `None` rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order, `y * BOARD_SIZE + x`.
    squares: [Square; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    fn index(coord: Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.y as usize * BOARD_SIZE + coord.x as usize)
        } else {
            None
        }
    }

    /// Gets the square at the coordinate, `None` when off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Square> {
        Self::index(coord).map(|i| self.squares[i])
    }

    /// Owner of the stone at the coordinate, if any.
    pub fn stone_at(&self, coord: Coordinate) -> Option<Stone> {
        self.get(coord).and_then(Square::stone)
    }

    /// Sets the square at the coordinate.
    pub fn set(&mut self, coord: Coordinate, square: Square) -> Result<(), &'static str> {
        let i = Self::index(coord).ok_or("Coordinate out of bounds")?;
        self.squares[i] = square;
        Ok(())
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Relocates the stone at `from` to `to`, clearing the source.
    pub(crate) fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Result<(), &'static str> {
        let square = self.get(from).ok_or("Coordinate out of bounds")?;
        if square == Square::Empty {
            return Err("No stone to relocate");
        }
        self.set(to, square)?;
        self.set(from, Square::Empty)
    }

    /// Number of stones on the board owned by `stone`.
    pub fn count(&self, stone: Stone) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(stone))
            .count()
    }

    /// Coordinates of every stone owned by `stone`, row-major.
    pub fn stones_of(&self, stone: Stone) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|c| self.stone_at(*c) == Some(stone))
            .collect()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::all().filter(|c| self.is_empty(*c)).collect()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; BOARD_SIZE * BOARD_SIZE] {
        &self.squares
    }

    /// Formats the board as a human-readable grid with `a..e` / `1..5` labels.
    pub fn display(&self) -> String {
        let mut result = String::from("  a b c d e\n");
        for y in (0..BOARD_SIZE).rev() {
            result.push_str(&format!("{} ", y + 1));
            for x in 0..BOARD_SIZE {
                let symbol = match self.squares[y * BOARD_SIZE + x] {
                    Square::Empty => '.',
                    Square::Occupied(stone) => stone.symbol(),
                };
                result.push(symbol);
                if x + 1 < BOARD_SIZE {
                    result.push(' ');
                }
            }
            if y > 0 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One of the two competitors: identity plus remaining reserve.
///
/// Invariant: `reserve + stones on board == RESERVE` for the owning stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Competitor {
    stone: Stone,
    reserve: u8,
}

impl Competitor {
    /// Creates a competitor with a full reserve.
    pub fn new(stone: Stone) -> Self {
        Self {
            stone,
            reserve: RESERVE,
        }
    }

    /// Creates a competitor with an explicit reserve, capped at [`RESERVE`].
    pub fn with_reserve(stone: Stone, reserve: u8) -> Self {
        Self {
            stone,
            reserve: reserve.min(RESERVE),
        }
    }

    /// The stone this competitor owns.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Stones left to place.
    pub fn reserve(&self) -> u8 {
        self.reserve
    }

    /// Takes one stone from the reserve.
    pub(crate) fn take_stone(&mut self) -> Result<(), &'static str> {
        self.reserve = self.reserve.checked_sub(1).ok_or("Reserve exhausted")?;
        Ok(())
    }
}
