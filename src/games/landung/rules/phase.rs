//! Turn-phase validation: which action shapes each turn allows.

use super::super::{Action, ActionKind, Rejection};
use tracing::instrument;

/// Decides whether the action's shape fits the turn, and whether every
/// coordinate it names lies on the board.
///
/// - turns 0 and 1: `Place` only
/// - turn 3: `Place` or `MoveAndPlace`
/// - turn 2 and from turn 4 on: `MoveAndPlace`, or `Remove` once `reserve` is 0
///
/// The shape rules are skipped for override actions; the bounds check never is.
/// Pure: no board access, no mutation.
#[instrument(level = "trace")]
pub fn validate_phase(turn: u32, action: &Action, reserve: u8) -> Result<(), Rejection> {
    if !action.override_rules {
        check_shape(turn, &action.kind, reserve)?;
    }
    check_bounds(&action.kind)
}

fn check_shape(turn: u32, kind: &ActionKind, reserve: u8) -> Result<(), Rejection> {
    match turn {
        0 | 1 => match kind {
            ActionKind::Place { .. } => Ok(()),
            _ => Err(Rejection::PlacementOnly),
        },
        3 => match kind {
            ActionKind::Place { .. } | ActionKind::MoveAndPlace { .. } => Ok(()),
            _ => Err(Rejection::PlaceOrMoveAndPlace),
        },
        _ => match kind {
            ActionKind::MoveAndPlace { .. } => Ok(()),
            ActionKind::Remove { .. } if reserve == 0 => Ok(()),
            _ => Err(Rejection::MoveAndPlaceRequired),
        },
    }
}

fn check_bounds(kind: &ActionKind) -> Result<(), Rejection> {
    match kind.coordinates().into_iter().find(|c| !c.in_bounds()) {
        Some(coordinate) => Err(Rejection::OutOfBounds { coordinate }),
        None => Ok(()),
    }
}
