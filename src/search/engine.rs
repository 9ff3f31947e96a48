//! Negamax search with alpha-beta pruning over private board copies.

use super::difficulty::{Difficulty, Strategy};
use super::heuristic::Heuristic;
use crate::games::landung::rules::{
    execute, find_winner_for_mover, has_legal_action, legal_actions,
};
use crate::games::landung::{Action, Board, Competitor, Stone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Score of a won position, reduced by one per ply so faster wins rank higher.
pub const WIN_SCORE: i32 = 1_000_000;

const INFINITY: i32 = i32::MAX;

/// Errors from the search engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
pub enum SearchError {
    /// The competitor to move has nothing legal to do.
    #[display("{} has no legal action at turn {}", stone, turn)]
    NoLegalAction {
        /// Competitor to move.
        stone: Stone,
        /// Turn index searched.
        turn: u32,
    },

    /// A numeric level outside 0 through 4.
    #[display("unknown difficulty level {}", _0)]
    UnknownLevel(#[error(not(source))] u8),
}

/// The chosen action with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Action to play.
    pub action: Action,
    /// Score of the action from the mover's point of view.
    pub score: i32,
    /// Positions expanded.
    pub nodes: u64,
    /// Wall time spent.
    pub elapsed: Duration,
}

/// Search state: a private copy of everything the rules need.
#[derive(Debug, Clone)]
struct Node {
    board: Board,
    players: [Competitor; 2],
    turn: u32,
}

impl Node {
    fn to_move(&self) -> Stone {
        Stone::to_move_at(self.turn)
    }

    fn actions(&self) -> Vec<Action> {
        let mover = self.to_move();
        legal_actions(&self.board, &self.players[mover.index()], self.turn)
    }

    fn child(&self, action: &Action) -> Option<Node> {
        let mut next = self.clone();
        let mover = action.actor;
        execute(&mut next.board, &mut next.players[mover.index()], &action.kind).ok()?;
        next.turn += 1;
        Some(next)
    }
}

/// A candidate action with its resulting position.
#[derive(Debug)]
struct Candidate {
    action: Action,
    node: Node,
    /// `Some(true)` when the mover has won, `Some(false)` when it has lost.
    decided: Option<bool>,
    /// Static evaluation from the mover's point of view.
    estimate: i32,
}

impl Candidate {
    fn rank(&self) -> i32 {
        match self.decided {
            Some(true) => INFINITY,
            Some(false) => -INFINITY,
            None => self.estimate,
        }
    }
}

/// Picks actions for one automated competitor.
///
/// Levels 1 through 4 are deterministic. Level 0 draws from a seeded
/// [`StdRng`], so a fixed seed reproduces its games.
#[derive(Debug)]
pub struct SearchEngine {
    difficulty: Difficulty,
    heuristic: Option<Box<dyn Heuristic>>,
    rng: StdRng,
    nodes: u64,
}

impl SearchEngine {
    /// Creates an engine; level 0 is seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::build(difficulty, StdRng::from_os_rng())
    }

    /// Creates an engine whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::build(difficulty, StdRng::seed_from_u64(seed))
    }

    fn build(difficulty: Difficulty, rng: StdRng) -> Self {
        let heuristic = match difficulty.strategy() {
            Strategy::Random => None,
            Strategy::Negamax { heuristic, .. } => Some(heuristic.build()),
        };
        Self {
            difficulty,
            heuristic,
            rng,
            nodes: 0,
        }
    }

    /// The level this engine plays at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a legal action for the competitor to move at `turn`.
    pub fn decide_action(
        &mut self,
        board: &Board,
        players: &[Competitor; 2],
        turn: u32,
    ) -> Result<Action, SearchError> {
        self.search(board, players, turn).map(|decision| decision.action)
    }

    /// Like [`Self::decide_action`], with score and statistics.
    #[instrument(skip(self, board, players), fields(level = self.difficulty.level()))]
    pub fn search(
        &mut self,
        board: &Board,
        players: &[Competitor; 2],
        turn: u32,
    ) -> Result<Decision, SearchError> {
        let started = Instant::now();
        self.nodes = 0;
        let root = Node {
            board: board.clone(),
            players: *players,
            turn,
        };
        let mover = root.to_move();

        let (action, score) = match self.difficulty.strategy() {
            Strategy::Random => {
                let actions = root.actions();
                if actions.is_empty() {
                    return Err(SearchError::NoLegalAction { stone: mover, turn });
                }
                self.nodes = 1;
                let index = self.rng.random_range(0..actions.len());
                (actions[index], 0)
            }
            Strategy::Negamax { depth, beam, .. } => {
                let candidates = self.expand(&root, beam);
                let Some(first) = candidates.first() else {
                    return Err(SearchError::NoLegalAction { stone: mover, turn });
                };
                let mut best = (first.action, -INFINITY);
                let mut alpha = -INFINITY;
                for candidate in &candidates {
                    let score = self.score(candidate, depth, 1, alpha, INFINITY);
                    if score > best.1 {
                        best = (candidate.action, score);
                    }
                    alpha = alpha.max(score);
                }
                best
            }
        };

        let decision = Decision {
            action,
            score,
            nodes: self.nodes,
            elapsed: started.elapsed(),
        };
        debug!(
            action = %decision.action,
            score = decision.score,
            nodes = decision.nodes,
            elapsed_ms = decision.elapsed.as_millis() as u64,
            "Search finished"
        );
        Ok(decision)
    }

    /// Value of `candidate` for the competitor who played it.
    ///
    /// `ply` is the depth of the candidate's position below the root.
    fn score(&mut self, candidate: &Candidate, depth: u32, ply: i32, alpha: i32, beta: i32) -> i32 {
        match candidate.decided {
            Some(true) => WIN_SCORE - ply,
            Some(false) => -(WIN_SCORE - ply),
            None if depth <= 1 => candidate.estimate,
            None => -self.negamax(&candidate.node, depth - 1, ply, -beta, -alpha),
        }
    }

    /// Value of `node` for the competitor to move there.
    fn negamax(&mut self, node: &Node, depth: u32, ply: i32, mut alpha: i32, beta: i32) -> i32 {
        let beam = match self.difficulty.strategy() {
            Strategy::Negamax { beam, .. } => beam,
            Strategy::Random => usize::MAX,
        };
        let candidates = self.expand(node, beam);
        if candidates.is_empty() {
            // Blocked: the competitor to move has lost.
            return -(WIN_SCORE - ply);
        }

        let mut best = -INFINITY;
        for candidate in &candidates {
            let score = self.score(candidate, depth, ply + 1, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Legal candidates at `node`, best static estimate first, at most `beam`.
    ///
    /// The sort is stable, so equal estimates keep the enumeration order.
    fn expand(&mut self, node: &Node, beam: usize) -> Vec<Candidate> {
        self.nodes += 1;
        let mover = node.to_move();
        let mut candidates: Vec<Candidate> = node
            .actions()
            .into_iter()
            .filter_map(|action| {
                let child = node.child(&action)?;
                let decided = match find_winner_for_mover(&child.board, mover) {
                    Some(winner) => Some(winner == mover),
                    None => {
                        let next = mover.opponent();
                        let blocked =
                            !has_legal_action(&child.board, &child.players[next.index()], child.turn);
                        blocked.then_some(true)
                    }
                };
                let estimate = match (&self.heuristic, decided) {
                    (Some(heuristic), None) => heuristic.evaluate(&child.board, mover),
                    _ => 0,
                };
                Some(Candidate {
                    action,
                    node: child,
                    decided,
                    estimate,
                })
            })
            .collect();
        candidates.sort_by_key(|c| Reverse(c.rank()));
        candidates.truncate(beam);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Coordinate, Square, RESERVE};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn position(first: &[(i32, i32)], second: &[(i32, i32)]) -> (Board, [Competitor; 2]) {
        let mut board = Board::new();
        for &(x, y) in first {
            board.set(c(x, y), Square::Occupied(Stone::First)).unwrap();
        }
        for &(x, y) in second {
            board.set(c(x, y), Square::Occupied(Stone::Second)).unwrap();
        }
        let players = [
            Competitor::with_reserve(Stone::First, RESERVE - first.len() as u8),
            Competitor::with_reserve(Stone::Second, RESERVE - second.len() as u8),
        ];
        (board, players)
    }

    #[test]
    fn test_random_level_is_reproducible() {
        let board = Board::new();
        let players = Stone::BOTH.map(Competitor::new);
        let mut a = SearchEngine::with_seed(Difficulty::Noob, 7);
        let mut b = SearchEngine::with_seed(Difficulty::Noob, 7);
        for _ in 0..5 {
            assert_eq!(
                a.decide_action(&board, &players, 0).unwrap(),
                b.decide_action(&board, &players, 0).unwrap()
            );
        }
    }

    #[test]
    fn test_easy_takes_immediate_win() {
        // First to move with three in row 1 and d1 still free.
        let (board, players) = position(
            &[(0, 0), (1, 0), (2, 0), (4, 4)],
            &[(0, 4), (2, 2), (4, 2), (1, 3)],
        );
        let mut engine = SearchEngine::new(Difficulty::Easy);
        let decision = engine.search(&board, &players, 8).unwrap();
        assert_eq!(decision.score, WIN_SCORE - 1);
        let mut after = board.clone();
        let mut me = players[0];
        execute(&mut after, &mut me, &decision.action.kind).unwrap();
        assert!(crate::games::landung::rules::has_line(&after, Stone::First));
    }

    #[test]
    fn test_medium_blocks_open_threat() {
        // Second threatens to fill d1 on its next turn.
        let (board, players) = position(
            &[(0, 4), (4, 4), (2, 3)],
            &[(0, 0), (1, 0), (2, 0), (4, 2)],
        );
        let mut engine = SearchEngine::new(Difficulty::Medium);
        let action = engine.decide_action(&board, &players, 6).unwrap();
        let mut after = board.clone();
        let mut me = players[0];
        execute(&mut after, &mut me, &action.kind).unwrap();
        assert_eq!(after.stone_at(c(3, 0)), Some(Stone::First), "{action}");
    }

    #[test]
    fn test_search_is_deterministic() {
        let (board, players) = position(&[(1, 1), (3, 3)], &[(1, 3), (3, 1)]);
        let mut a = SearchEngine::new(Difficulty::Medium);
        let mut b = SearchEngine::new(Difficulty::Medium);
        assert_eq!(
            a.decide_action(&board, &players, 4).unwrap(),
            b.decide_action(&board, &players, 4).unwrap()
        );
    }

    #[test]
    fn test_blocked_competitor_yields_error() {
        let (board, players) = position(&[(0, 0)], &[(1, 0), (0, 1), (1, 1)]);
        let mut engine = SearchEngine::new(Difficulty::Easy);
        assert_eq!(
            engine.decide_action(&board, &players, 4),
            Err(SearchError::NoLegalAction {
                stone: Stone::First,
                turn: 4
            })
        );
    }

    #[test]
    fn test_engine_never_mutates_inputs() {
        let (board, players) = position(&[(1, 1)], &[(3, 3)]);
        let before = (board.clone(), players);
        let mut engine = SearchEngine::new(Difficulty::Medium);
        engine.decide_action(&board, &players, 2).unwrap();
        assert_eq!((board, players), before);
    }
}
