//! Applying an already-validated action to a board and reserve.

use super::super::{ActionKind, Board, Competitor, Square};

/// Mutates `board` and `competitor` as `kind` describes.
///
/// The relocation half clears the source and occupies the destination; the
/// placement half takes one stone from the reserve. Callers validate first;
/// the error only reports a broken precondition, and on error the inputs may
/// be partially updated.
pub fn execute(
    board: &mut Board,
    competitor: &mut Competitor,
    kind: &ActionKind,
) -> Result<(), &'static str> {
    if let Some((from, to)) = kind.travel() {
        board.relocate(from, to)?;
    }
    if let Some(at) = kind.placement() {
        competitor.take_stone()?;
        board.set(at, Square::Occupied(competitor.stone()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Coordinate, Stone, RESERVE};

    #[test]
    fn test_move_and_place_updates_board_and_reserve() {
        let mut board = Board::new();
        let mut competitor = Competitor::with_reserve(Stone::First, RESERVE - 1);
        board
            .set(Coordinate::new(0, 0), Square::Occupied(Stone::First))
            .unwrap();
        let kind = ActionKind::MoveAndPlace {
            from: Coordinate::new(0, 0),
            to: Coordinate::new(2, 0),
            place_to: Coordinate::new(0, 0),
        };
        execute(&mut board, &mut competitor, &kind).unwrap();
        assert_eq!(board.count(Stone::First), 2);
        assert_eq!(competitor.reserve(), RESERVE - 2);
        assert_eq!(board.stone_at(Coordinate::new(2, 0)), Some(Stone::First));
    }

    #[test]
    fn test_remove_keeps_reserve() {
        let mut board = Board::new();
        let mut competitor = Competitor::with_reserve(Stone::Second, 0);
        board
            .set(Coordinate::new(4, 4), Square::Occupied(Stone::Second))
            .unwrap();
        let kind = ActionKind::Remove {
            from: Coordinate::new(4, 4),
            to: Coordinate::new(4, 2),
        };
        execute(&mut board, &mut competitor, &kind).unwrap();
        assert_eq!(competitor.reserve(), 0);
        assert!(board.is_empty(Coordinate::new(4, 4)));
    }
}
