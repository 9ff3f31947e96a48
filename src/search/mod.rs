//! Automated decision making for Landung.
//!
//! [`SearchEngine`] picks an action for the competitor to move. How hard it
//! looks is governed by a [`Difficulty`] level: level 0 plays uniformly at
//! random, levels 1 through 4 run a negamax search with alpha-beta pruning
//! of growing depth over a static [`Heuristic`].

mod difficulty;
mod engine;
mod heuristic;

pub use difficulty::{Difficulty, Strategy};
pub use engine::{Decision, SearchEngine, SearchError, WIN_SCORE};
pub use heuristic::{Heuristic, HeuristicKind, LineHeuristic, ThreatHeuristic};
