//! Game rules for Landung.
//!
//! This module contains pure functions for evaluating actions and board
//! state. Rules are separated from board storage to enable composition into
//! the contract system and reuse by the search engine.

pub mod execute;
pub mod geometry;
pub mod legal;
pub mod phase;
pub mod win;

pub use execute::execute;
pub use geometry::{validate_travel, MIN_TRAVEL};
pub use legal::{has_legal_action, legal_actions, mobility, validate};
pub use phase::validate_phase;
pub use win::{find_winner, find_winner_for_mover, has_line, windows, LINE_LENGTH};
