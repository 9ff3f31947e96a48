//! Errors raised while applying actions or restoring games.

use super::Rejection;
use derive_more::{Display, Error, From};

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ActionError {
    /// The action broke a game rule.
    #[display("Action rejected: {}", _0)]
    Rejected(#[error(source)] Rejection),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

impl ActionError {
    /// The rejection category, when the error is an ordinary rule violation.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ActionError::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

/// Error decoding or restoring a game snapshot.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    /// The JSON could not be encoded or decoded.
    #[display("Snapshot JSON error: {}", _0)]
    Json(#[error(source)] serde_json::Error),

    /// The snapshot describes an impossible position.
    #[display("Inconsistent snapshot: {}", _0)]
    #[from(ignore)]
    Inconsistent(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_snapshot_error_sources() {
        let json = serde_json::from_str::<u8>("{").unwrap_err();
        assert!(SnapshotError::from(json).source().is_some());
        assert!(SnapshotError::Inconsistent("seats".to_string()).source().is_none());
        assert!(ActionError::InvariantViolation("x".to_string()).source().is_none());
    }
}
