//! Static position evaluation.

use crate::games::landung::rules::{mobility, windows, LINE_LENGTH};
use crate::games::landung::{Board, Coordinate, Stone};
use std::collections::HashSet;

/// Evaluates a board from one competitor's point of view.
///
/// Positive scores favour `perspective`. Implementations are pure.
pub trait Heuristic: Send + Sync + std::fmt::Debug {
    /// Scores `board` for `perspective`.
    fn evaluate(&self, board: &Board, perspective: Stone) -> i32;
}

/// Selects one of the built-in heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// [`LineHeuristic`].
    Lines,
    /// [`ThreatHeuristic`].
    Threats,
}

impl HeuristicKind {
    /// Boxed instance of the selected heuristic.
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Lines => Box::new(LineHeuristic),
            HeuristicKind::Threats => Box::new(ThreatHeuristic),
        }
    }
}

/// Stone counts inside one window.
#[derive(Debug, Clone, Copy, Default)]
struct WindowCount {
    own: usize,
    opp: usize,
    empty: usize,
}

fn count_window(board: &Board, window: &[Coordinate; LINE_LENGTH], own: Stone) -> WindowCount {
    window
        .iter()
        .fold(WindowCount::default(), |mut count, cell| {
            match board.stone_at(*cell) {
                Some(stone) if stone == own => count.own += 1,
                Some(_) => count.opp += 1,
                None => count.empty += 1,
            }
            count
        })
}

/// Scores every four-cell window by how close each side is to filling it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeuristic;

impl LineHeuristic {
    fn score_window(count: WindowCount) -> i32 {
        match (count.own, count.opp, count.empty) {
            (3, 0, 1) => 50,
            (2, 0, 2) => 10,
            (1, 0, 3) => 1,
            (0, 3, 1) => -80,
            (0, 2, 2) => -10,
            (0, 1, 3) => -1,
            _ => 0,
        }
    }
}

impl Heuristic for LineHeuristic {
    fn evaluate(&self, board: &Board, perspective: Stone) -> i32 {
        windows()
            .iter()
            .map(|w| Self::score_window(count_window(board, w, perspective)))
            .sum()
    }
}

/// Line weights plus open threat cells and stone mobility.
///
/// A threat cell is an empty cell that completes a window holding three
/// stones of one side. Two distinct threat cells cannot both be covered by a
/// single placement, so they weigh extra. A side whose stones cannot travel
/// at all is one move from losing by blockade.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    const DOUBLE_THREAT: i32 = 200;
    const MOBILITY_WEIGHT: i32 = 2;
    const IMMOBILE_PENALTY: i32 = 500;

    fn score_window(count: WindowCount) -> i32 {
        match (count.own, count.opp, count.empty) {
            (3, 0, 1) => 120,
            (2, 0, 2) => 12,
            (1, 0, 3) => 1,
            (0, 3, 1) => -150,
            (0, 2, 2) => -12,
            (0, 1, 3) => -1,
            _ => 0,
        }
    }

    fn mobility_term(board: &Board, stone: Stone) -> i32 {
        if board.count(stone) == 0 {
            return 0;
        }
        match mobility(board, stone) {
            0 => -Self::IMMOBILE_PENALTY,
            n => Self::MOBILITY_WEIGHT * n as i32,
        }
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, perspective: Stone) -> i32 {
        let mut score = 0;
        let mut own_threats = HashSet::new();
        let mut opp_threats = HashSet::new();

        for window in windows() {
            let count = count_window(board, window, perspective);
            score += Self::score_window(count);
            if count.empty == 1 && (count.own == 3 || count.opp == 3) {
                let gap = window.iter().find(|c| board.is_empty(**c));
                if let Some(gap) = gap {
                    if count.own == 3 {
                        own_threats.insert(*gap);
                    } else {
                        opp_threats.insert(*gap);
                    }
                }
            }
        }

        if own_threats.len() >= 2 {
            score += Self::DOUBLE_THREAT;
        }
        if opp_threats.len() >= 2 {
            score -= Self::DOUBLE_THREAT;
        }

        score + Self::mobility_term(board, perspective)
            - Self::mobility_term(board, perspective.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::Square;

    fn board_with(first: &[(i32, i32)], second: &[(i32, i32)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in first {
            board.set(Coordinate::new(x, y), Square::Occupied(Stone::First)).unwrap();
        }
        for &(x, y) in second {
            board.set(Coordinate::new(x, y), Square::Occupied(Stone::Second)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let board = Board::new();
        assert_eq!(LineHeuristic.evaluate(&board, Stone::First), 0);
        assert_eq!(ThreatHeuristic.evaluate(&board, Stone::First), 0);
    }

    #[test]
    fn test_scores_are_antisymmetric() {
        let board = board_with(&[(0, 0), (1, 1)], &[(4, 4)]);
        for heuristic in [HeuristicKind::Lines.build(), HeuristicKind::Threats.build()] {
            let first = heuristic.evaluate(&board, Stone::First);
            let second = heuristic.evaluate(&board, Stone::Second);
            assert!(first > 0, "{heuristic:?}");
            assert!(second < 0, "{heuristic:?}");
        }
    }

    #[test]
    fn test_three_in_a_window_beats_scattered_stones() {
        let lined = board_with(&[(0, 0), (1, 0), (2, 0)], &[]);
        let scattered = board_with(&[(0, 0), (2, 2), (4, 4)], &[]);
        assert!(
            LineHeuristic.evaluate(&lined, Stone::First)
                > LineHeuristic.evaluate(&scattered, Stone::First)
        );
    }

    #[test]
    fn test_double_threat_is_rewarded() {
        // Row 1 and column a both wait for a fourth stone.
        let double = board_with(&[(1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (0, 3)], &[]);
        let single = board_with(&[(1, 0), (2, 0), (3, 0), (4, 2), (2, 4), (4, 4)], &[(4, 0)]);
        assert!(
            ThreatHeuristic.evaluate(&double, Stone::First)
                > ThreatHeuristic.evaluate(&single, Stone::First)
        );
    }

    #[test]
    fn test_immobile_side_is_penalised() {
        let fenced = board_with(&[(0, 0)], &[(1, 0), (0, 1), (1, 1)]);
        assert!(ThreatHeuristic.evaluate(&fenced, Stone::First) < -400);
    }
}
