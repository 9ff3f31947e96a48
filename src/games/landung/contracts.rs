//! Contract-based validation for Landung.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are the game rules and are always checked;
//! postconditions are the state invariants and are checked in debug builds.

use super::error::ActionError;
use super::invariants::{InvariantSet, LandungInvariants};
use super::rules;
use super::typestate::GameInProgress;
use super::{Action, Rejection};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

/// Precondition: the actor must be the competitor due to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the actor against the turn parity.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &GameInProgress) -> Result<(), Rejection> {
        if action.actor != game.to_move() {
            Err(Rejection::NotYourTurn {
                actor: action.actor,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the action satisfies every game rule for this turn.
pub struct RulesSatisfied;

impl RulesSatisfied {
    /// Runs the full rule validation.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &GameInProgress) -> Result<(), Rejection> {
        rules::validate(
            game.board(),
            game.competitor(action.actor),
            game.turn(),
            action,
        )
    }
}

/// Composite precondition: right player, legal action.
pub struct LegalAction;

impl LegalAction {
    /// Validates all preconditions for an action.
    #[instrument(skip(game))]
    pub fn check(action: &Action, game: &GameInProgress) -> Result<(), Rejection> {
        PlayersTurn::check(action, game)?;
        RulesSatisfied::check(action, game)?;
        Ok(())
    }
}

/// Contract for applying actions.
///
/// Preconditions:
/// - the actor is due to move
/// - the action passes turn phase, bounds, reserve, occupancy, ownership and geometry checks
///
/// Postconditions:
/// - reserves are conserved
/// - turns alternate and the turn index counts the history
/// - the history replays to the current board
pub struct ActionContract;

impl Contract<GameInProgress, Action> for ActionContract {
    fn pre(game: &GameInProgress, action: &Action) -> Result<(), ActionError> {
        LegalAction::check(action, game).map_err(ActionError::from)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), ActionError> {
        LandungInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::landung::{Coordinate, GameSetup, Square, Stone};

    #[test]
    fn test_precondition_accepts_opening_place() {
        let game = GameSetup::new().start();
        let action = Action::place(Stone::First, Coordinate::new(2, 2));
        assert!(ActionContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start();
        let action = Action::place(Stone::Second, Coordinate::new(2, 2));
        assert_eq!(
            ActionContract::pre(&game, &action),
            Err(ActionError::Rejected(Rejection::NotYourTurn {
                actor: Stone::Second
            }))
        );
    }

    #[test]
    fn test_precondition_wrong_phase() {
        let game = GameSetup::new().start();
        let action = Action::relocate(Stone::First, Coordinate::new(0, 0), Coordinate::new(0, 2));
        assert_eq!(
            ActionContract::pre(&game, &action),
            Err(ActionError::Rejected(Rejection::PlacementOnly))
        );
    }

    #[test]
    fn test_postcondition_holds_after_action() {
        let game = GameSetup::new().start();
        let action = Action::place(Stone::First, Coordinate::new(2, 2));
        let after = game.clone().apply(action).unwrap().in_progress().unwrap();
        assert!(ActionContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start();
        let action = Action::place(Stone::First, Coordinate::new(2, 2));
        let mut after = game.clone().apply(action).unwrap().in_progress().unwrap();
        after
            .board
            .set(Coordinate::new(0, 0), Square::Occupied(Stone::Second))
            .unwrap();
        assert!(matches!(
            ActionContract::post(&game, &after),
            Err(ActionError::InvariantViolation(_))
        ));
    }
}
