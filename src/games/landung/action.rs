//! First-class action types for Landung.
//!
//! Actions are domain events, not side effects. They carry the actor's
//! intent and are validated against the turn phase, the board bounds and the
//! movement geometry before anything is applied.

use super::position::Coordinate;
use super::types::Stone;
use serde::{Deserialize, Serialize};

/// The shape of an action, with the coordinates each shape needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Take a stone from the reserve and put it on an empty cell.
    Place {
        /// Target cell.
        to: Coordinate,
    },
    /// Relocate an own stone along a straight line.
    Move {
        /// Stone to move.
        from: Coordinate,
        /// Landing cell.
        to: Coordinate,
    },
    /// Relocate an own stone, then place a reserve stone.
    MoveAndPlace {
        /// Stone to move.
        from: Coordinate,
        /// Landing cell.
        to: Coordinate,
        /// Cell for the new stone, judged after the move.
        place_to: Coordinate,
    },
    /// Bare relocation once the reserve is used up.
    Remove {
        /// Stone to move.
        from: Coordinate,
        /// Landing cell.
        to: Coordinate,
    },
}

impl ActionKind {
    /// Every coordinate the action names, in `from`, `to`, `place_to` order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match *self {
            ActionKind::Place { to } => vec![to],
            ActionKind::Move { from, to } | ActionKind::Remove { from, to } => vec![from, to],
            ActionKind::MoveAndPlace { from, to, place_to } => vec![from, to, place_to],
        }
    }

    /// The relocation half, if the action has one.
    pub fn travel(&self) -> Option<(Coordinate, Coordinate)> {
        match *self {
            ActionKind::Place { .. } => None,
            ActionKind::Move { from, to }
            | ActionKind::Remove { from, to }
            | ActionKind::MoveAndPlace { from, to, .. } => Some((from, to)),
        }
    }

    /// The placement half, if the action has one.
    pub fn placement(&self) -> Option<Coordinate> {
        match *self {
            ActionKind::Place { to } => Some(to),
            ActionKind::MoveAndPlace { place_to, .. } => Some(place_to),
            ActionKind::Move { .. } | ActionKind::Remove { .. } => None,
        }
    }

    /// Short name of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Place { .. } => "place",
            ActionKind::Move { .. } => "move",
            ActionKind::MoveAndPlace { .. } => "move-and-place",
            ActionKind::Remove { .. } => "remove",
        }
    }
}

/// An action taken by one competitor.
///
/// Equality is structural over actor, kind and the override flag, so
/// actions can be deduplicated or used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The acting competitor.
    pub actor: Stone,
    /// What the action does.
    pub kind: ActionKind,
    /// Bypass phase, ownership and geometry rules. Bounds still apply.
    pub override_rules: bool,
}

impl Action {
    /// Creates an action that obeys the rules.
    pub fn new(actor: Stone, kind: ActionKind) -> Self {
        Self {
            actor,
            kind,
            override_rules: false,
        }
    }

    /// Creates an action that bypasses the phase and geometry rules.
    pub fn overriding(actor: Stone, kind: ActionKind) -> Self {
        Self {
            actor,
            kind,
            override_rules: true,
        }
    }

    /// Shorthand for a [`ActionKind::Place`] action.
    pub fn place(actor: Stone, to: Coordinate) -> Self {
        Self::new(actor, ActionKind::Place { to })
    }

    /// Shorthand for a [`ActionKind::Move`] action.
    pub fn relocate(actor: Stone, from: Coordinate, to: Coordinate) -> Self {
        Self::new(actor, ActionKind::Move { from, to })
    }

    /// Shorthand for a [`ActionKind::MoveAndPlace`] action.
    pub fn move_and_place(
        actor: Stone,
        from: Coordinate,
        to: Coordinate,
        place_to: Coordinate,
    ) -> Self {
        Self::new(actor, ActionKind::MoveAndPlace { from, to, place_to })
    }

    /// Shorthand for a [`ActionKind::Remove`] action.
    pub fn remove(actor: Stone, from: Coordinate, to: Coordinate) -> Self {
        Self::new(actor, ActionKind::Remove { from, to })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.actor)?;
        match self.kind {
            ActionKind::Place { to } => write!(f, "place {}", to)?,
            ActionKind::Move { from, to } => write!(f, "move {}->{}", from, to)?,
            ActionKind::MoveAndPlace { from, to, place_to } => {
                write!(f, "move {}->{}, place {}", from, to, place_to)?
            }
            ActionKind::Remove { from, to } => write!(f, "remove {}->{}", from, to)?,
        }
        if self.override_rules {
            write!(f, " (override)")?;
        }
        Ok(())
    }
}

/// Why an action was rejected.
///
/// Rejections are expected, non-fatal outcomes: the acting player is told
/// the category and asked again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum Rejection {
    /// Turns 0 and 1 only allow placing.
    #[display("opening turns allow placement only")]
    PlacementOnly,

    /// Turn 2 and turns from 4 on require a move-and-place.
    #[display("this turn requires move-and-place")]
    MoveAndPlaceRequired,

    /// Turn 3 allows a place or a move-and-place.
    #[display("this turn allows place or move-and-place")]
    PlaceOrMoveAndPlace,

    /// The actor is not the competitor due to move.
    #[display("it is not {}'s turn", actor)]
    NotYourTurn {
        /// The out-of-turn actor.
        actor: Stone,
    },

    /// A coordinate lies off the board.
    #[display("coordinate {} out of bounds", coordinate)]
    OutOfBounds {
        /// The offending coordinate.
        coordinate: Coordinate,
    },

    /// The actor has no stone left to place.
    #[display("no stones left in reserve")]
    ReserveExhausted,

    /// The moved cell holds no stone.
    #[display("no stone at {}", from)]
    SourceEmpty {
        /// The empty source cell.
        from: Coordinate,
    },

    /// The moved stone belongs to the opponent.
    #[display("stone at {} belongs to the opponent", from)]
    NotOwnStone {
        /// The source cell.
        from: Coordinate,
    },

    /// A landing or placement cell is taken.
    #[display("{} is already occupied", at)]
    DestinationOccupied {
        /// The occupied cell.
        at: Coordinate,
    },

    /// The step is not along a row, column or diagonal.
    #[display("moves must follow a straight line")]
    NotStraightLine,

    /// The step covers fewer than two cells.
    #[display("stones must travel at least two cells")]
    TooShort,

    /// A stone sits between source and landing cell.
    #[display("path is blocked at {}", at)]
    PathBlocked {
        /// The first occupied intermediate cell.
        at: Coordinate,
    },
}
