//! Difficulty levels and the search strategy each one selects.

use super::engine::SearchError;
use super::heuristic::HeuristicKind;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Strength of an automated player, from 0 (weakest) to 4 (strongest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Level 0: random legal actions.
    Noob,
    /// Level 1: greedy, one ply.
    Easy,
    /// Level 2: two plies, sees direct threats.
    #[default]
    Medium,
    /// Level 3: three plies with threat and mobility weights.
    Hard,
    /// Level 4: four plies with threat and mobility weights.
    Klaus,
}

/// How a level picks its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform choice among legal actions.
    Random,
    /// Negamax with alpha-beta pruning.
    Negamax {
        /// Plies searched.
        depth: u32,
        /// Candidates kept per node after ordering.
        beam: usize,
        /// Static evaluation at the leaves.
        heuristic: HeuristicKind,
    },
}

impl Difficulty {
    /// Highest supported level.
    pub const MAX_LEVEL: u8 = 4;

    /// Numeric level, 0 through [`Self::MAX_LEVEL`].
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Noob => 0,
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Klaus => 4,
        }
    }

    /// The strategy this level plays with.
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Noob => Strategy::Random,
            Difficulty::Easy => Strategy::Negamax {
                depth: 1,
                beam: usize::MAX,
                heuristic: HeuristicKind::Lines,
            },
            Difficulty::Medium => Strategy::Negamax {
                depth: 2,
                beam: 24,
                heuristic: HeuristicKind::Lines,
            },
            Difficulty::Hard => Strategy::Negamax {
                depth: 3,
                beam: 14,
                heuristic: HeuristicKind::Threats,
            },
            Difficulty::Klaus => Strategy::Negamax {
                depth: 4,
                beam: 10,
                heuristic: HeuristicKind::Threats,
            },
        }
    }

    /// All levels, weakest first.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        Difficulty::iter()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = SearchError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::iter()
            .find(|d| d.level() == level)
            .ok_or(SearchError::UnknownLevel(level))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}
