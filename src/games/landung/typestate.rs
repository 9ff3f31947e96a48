//! Phase-specific typestate structs for Landung.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `GameFinished` ALWAYS has an outcome, not `Option<Outcome>`, and only a
//! `GameInProgress` accepts actions.

use super::contracts::{ActionContract, Contract};
use super::error::{ActionError, SnapshotError};
use super::invariants::{Invariant, ReserveConservedInvariant};
use super::phases::{Outcome, WinReason};
use super::rules;
use super::snapshot::GameSnapshot;
use super::{Action, Board, Competitor, Stone};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: empty board, full reserves.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    players: [Competitor; 2],
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: Stone::BOTH.map(Competitor::new),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game; [`Stone::First`] acts at turn 0.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        let origin = GameSnapshot::new(self.board.clone(), self.players, 0);
        GameInProgress {
            board: self.board,
            players: self.players,
            turn: 0,
            history: Vec::new(),
            origin,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: can accept actions.
///
/// The turn index only ever grows, by exactly one per applied action.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) players: [Competitor; 2],
    pub(super) turn: u32,
    pub(super) history: Vec<Action>,
    pub(super) origin: GameSnapshot,
}

impl GameInProgress {
    /// Applies an action, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (turn order + every game rule)
    /// - Postconditions checked in debug builds only
    ///
    /// After the action, a four-in-a-row ends the game (the mover's own line
    /// takes precedence); otherwise, if the competitor due next has no legal
    /// action, the mover wins by blocking.
    #[instrument(skip(self), fields(turn = self.turn, action = %action))]
    pub fn apply(self, action: Action) -> Result<GameResult, ActionError> {
        ActionContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let competitor = &mut game.players[action.actor.index()];
        rules::execute(&mut game.board, competitor, &action.kind)
            .map_err(|e| ActionError::InvariantViolation(e.to_string()))?;
        game.history.push(action);
        game.turn += 1;

        #[cfg(debug_assertions)]
        ActionContract::post(&before, &game)?;

        Ok(game.settle())
    }

    /// Ends the game if the position is already decided.
    ///
    /// A four-in-a-row wins for its owner, the last mover's line first;
    /// otherwise a competitor due to move with no legal action loses. Used
    /// after every action and when resuming from a snapshot.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn settle(self) -> GameResult {
        let next = self.to_move();
        if let Some(winner) = rules::find_winner_for_mover(&self.board, next.opponent()) {
            debug!(%winner, turn = self.turn, "Four in a row");
            return GameResult::Finished(self.finish(Outcome::Winner {
                stone: winner,
                reason: WinReason::FourInARow,
            }));
        }

        if !rules::has_legal_action(&self.board, self.competitor(next), self.turn) {
            debug!(blocked = %next, turn = self.turn, "No legal action left");
            return GameResult::Finished(self.finish(Outcome::Winner {
                stone: next.opponent(),
                reason: WinReason::OpponentBlocked,
            }));
        }

        GameResult::InProgress(self)
    }

    /// Ends the game without a winner.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn declare_draw(self) -> GameFinished {
        self.finish(Outcome::Draw)
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            board: self.board,
            players: self.players,
            turn: self.turn,
            history: self.history,
            outcome,
        }
    }

    /// Returns the competitor due to move.
    pub fn to_move(&self) -> Stone {
        Stone::to_move_at(self.turn)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the competitor owning `stone`.
    pub fn competitor(&self, stone: Stone) -> &Competitor {
        &self.players[stone.index()]
    }

    /// Both competitors in seating order.
    pub fn players(&self) -> &[Competitor; 2] {
        &self.players
    }

    /// Returns the turn index.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the actions applied since the origin.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// The position the history starts from.
    pub fn origin(&self) -> &GameSnapshot {
        &self.origin
    }

    /// Every legal action for the competitor due to move.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn legal_actions(&self) -> Vec<Action> {
        rules::legal_actions(&self.board, self.competitor(self.to_move()), self.turn)
    }

    /// Captures {Board, Players, TurnIndex}.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.board.clone(), self.players, self.turn)
    }

    /// Resumes a game from a snapshot; the history starts empty at the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Inconsistent`] when the snapshot breaks the
    /// reserve invariant or names competitors out of seat order.
    #[instrument(skip(snapshot), fields(turn = snapshot.turn()))]
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let players = *snapshot.players();
        if players[0].stone() != Stone::First || players[1].stone() != Stone::Second {
            return Err(SnapshotError::Inconsistent(
                "competitors out of seat order".to_string(),
            ));
        }
        let game = Self {
            board: snapshot.board().clone(),
            players,
            turn: snapshot.turn(),
            history: Vec::new(),
            origin: snapshot,
        };
        if !ReserveConservedInvariant::holds(&game) {
            return Err(SnapshotError::Inconsistent(
                ReserveConservedInvariant::description().to_string(),
            ));
        }
        Ok(game)
    }

    /// Replays actions from a new game.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<GameResult, ActionError> {
        let mut game = GameSetup::new().start();

        for action in actions {
            match game.apply(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    players: [Competitor; 2],
    turn: u32,
    history: Vec<Action>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both competitors in seating order.
    pub fn players(&self) -> &[Competitor; 2] {
        &self.players
    }

    /// Number of turns played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the action history.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying an action.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// The in-progress game, if play continues.
    pub fn in_progress(self) -> Option<GameInProgress> {
        match self {
            GameResult::InProgress(game) => Some(game),
            GameResult::Finished(_) => None,
        }
    }

    /// The finished game, if play ended.
    pub fn finished(self) -> Option<GameFinished> {
        match self {
            GameResult::InProgress(_) => None,
            GameResult::Finished(game) => Some(game),
        }
    }
}
