//! Landung: place, move and align four stones on a 5x5 board.

mod action;
mod contracts;
mod error;
mod invariants;
mod phases;
mod position;
mod snapshot;
mod typestate;
mod types;

pub mod rules;

pub use action::{Action, ActionKind, Rejection};
pub use contracts::{ActionContract, Contract, LegalAction, PlayersTurn, RulesSatisfied};
pub use error::{ActionError, SnapshotError};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, LandungInvariants,
    ReplayConsistentInvariant, ReserveConservedInvariant,
};
pub use phases::{Outcome, WinReason};
pub use position::{Coordinate, Direction};
pub use snapshot::GameSnapshot;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Board, Competitor, Square, Stone, BOARD_SIZE, RESERVE};
