//! Game orchestration between players.

use crate::games::landung::{
    Action, ActionError, GameFinished, GameInProgress, GameResult, GameSetup, GameSnapshot,
    LegalAction, Outcome, Rejection, SnapshotError, Stone,
};
use crate::mode::{GameMode, HumanInputs};
use crate::players::{Player, PlayerError};
use derive_more::{Display, Error};
use std::sync::mpsc::Sender;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the game loop to an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board before a player is asked to act.
    StateChanged(String),
    /// An action was applied.
    MoveMade {
        /// Acting player's name.
        player: String,
        /// The applied action.
        action: Action,
    },
    /// An action was rejected.
    Rejected {
        /// Acting player's name.
        player: String,
        /// Why it was rejected.
        rejection: Rejection,
    },
    /// Game ended.
    GameOver {
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// Failures that abort a game.
///
/// None of these are user mistakes: those surface as rejections and are
/// retried.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// An automated player produced an action the rules reject.
    #[display("{} produced illegal action {}: {}", player, action, rejection)]
    IllegalAutomatedAction {
        /// Offending player.
        player: String,
        /// The rejected action.
        action: Action,
        /// Why it was rejected.
        rejection: Rejection,
    },

    /// A human player's input source went away.
    #[display("input closed for {}", _0)]
    InputClosed(#[error(not(source))] String),

    /// A player failed to produce an action.
    #[display("player failed: {}", _0)]
    Player(#[error(source)] PlayerError),

    /// Applying an action broke a game invariant.
    #[display("game state error: {}", _0)]
    Action(#[error(source)] ActionError),

    /// The game was already played.
    #[display("game already finished")]
    AlreadyFinished,
}

impl From<PlayerError> for GameError {
    fn from(error: PlayerError) -> Self {
        match error {
            PlayerError::InputClosed(name) => GameError::InputClosed(name),
            other => GameError::Player(other),
        }
    }
}

/// Runs one game between two players.
///
/// The loop owns the board: it asks the player to move for an action,
/// applies accepted actions and re-asks after a rejection without advancing
/// the turn. Interactive players are re-asked without bound; an automated
/// player's rejection aborts the game.
pub struct Game {
    players: [Box<dyn Player>; 2],
    state: Option<GameInProgress>,
    finished: Option<GameFinished>,
    max_turns: Option<u32>,
    events: Option<Sender<GameEvent>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("first", &self.players[0].name())
            .field("second", &self.players[1].name())
            .field("max_turns", &self.max_turns)
            .field("finished", &self.finished.as_ref().map(|g| *g.outcome()))
            .finish()
    }
}

impl Game {
    /// Creates a game from a mode, returning the senders for human seats.
    #[instrument(fields(mode = %mode.name()))]
    pub fn new(mode: GameMode) -> (Self, HumanInputs) {
        let ([first, second], inputs) = mode.build();
        (Self::with_players(first, second), inputs)
    }

    /// Creates a game between two arbitrary players; `first` moves first.
    pub fn with_players(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            players: [first, second],
            state: Some(GameSetup::new().start()),
            finished: None,
            max_turns: None,
            events: None,
        }
    }

    /// Ends the game in a draw once the turn index reaches `max_turns`.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Sends progress events to `events`.
    pub fn with_events(mut self, events: Sender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Starts from a saved position instead of an empty board.
    pub fn resume_from(mut self, snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        self.state = Some(GameInProgress::restore(snapshot)?);
        self.finished = None;
        Ok(self)
    }

    /// Plays the game to the end.
    ///
    /// When `observe` is set, the board is logged before every request.
    ///
    /// # Errors
    ///
    /// See [`GameError`]. A game can only be run once.
    #[instrument(skip(self), fields(first = %self.players[0].name(), second = %self.players[1].name()))]
    pub fn run(&mut self, observe: bool) -> Result<Outcome, GameError> {
        let state = self.state.take().ok_or(GameError::AlreadyFinished)?;
        info!("Starting game");

        let mut game = match state.settle() {
            GameResult::InProgress(game) => game,
            GameResult::Finished(done) => return Ok(self.conclude(done)),
        };

        loop {
            if self.max_turns.is_some_and(|limit| game.turn() >= limit) {
                info!(turn = game.turn(), "Turn limit reached");
                let done = game.declare_draw();
                return Ok(self.conclude(done));
            }

            let stone = game.to_move();
            if observe {
                info!(turn = game.turn(), to_move = %stone, "\n{}", game.board());
            }
            self.emit(GameEvent::StateChanged(game.board().display()));

            let action = self.request_action(stone, &game)?;
            let name = self.players[stone.index()].name().to_string();

            game = match game.apply(action) {
                Ok(GameResult::InProgress(next)) => {
                    self.emit(GameEvent::MoveMade { player: name, action });
                    next
                }
                Ok(GameResult::Finished(done)) => {
                    self.emit(GameEvent::MoveMade { player: name, action });
                    return Ok(self.conclude(done));
                }
                Err(e) => return Err(GameError::Action(e)),
            };
        }
    }

    /// Asks the player for `stone` until it offers a legal action.
    fn request_action(&mut self, stone: Stone, game: &GameInProgress) -> Result<Action, GameError> {
        loop {
            let player = &mut self.players[stone.index()];
            debug!(player = %player.name(), turn = game.turn(), "Waiting for action");
            let action = player.decide_action(game)?;

            let Some(rejection) = rejection_of(game, &action) else {
                return Ok(action);
            };

            warn!(player = %player.name(), %action, reason = %rejection, "Action rejected");
            if player.is_automated() {
                return Err(GameError::IllegalAutomatedAction {
                    player: player.name().to_string(),
                    action,
                    rejection,
                });
            }
            player.notify_invalid_move(&rejection);
            let name = player.name().to_string();
            self.emit(GameEvent::Rejected {
                player: name,
                rejection,
            });
        }
    }

    fn conclude(&mut self, done: GameFinished) -> Outcome {
        let outcome = *done.outcome();
        let winner = outcome.winner().map(|stone| {
            let player = &mut self.players[stone.index()];
            player.notify_winner();
            player.name().to_string()
        });
        info!(%outcome, turn = done.turn(), winner = ?winner, "Game over");
        self.emit(GameEvent::GameOver { winner });
        self.finished = Some(done);
        outcome
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.events {
            if tx.send(event).is_err() {
                debug!("Event receiver dropped");
            }
        }
    }

    /// Display name of the winner, once the game has one.
    pub fn winner_name(&self) -> Option<&str> {
        let stone = self.finished.as_ref()?.outcome().winner()?;
        Some(self.players[stone.index()].name())
    }

    /// The final state, once the game is over.
    pub fn finished(&self) -> Option<&GameFinished> {
        self.finished.as_ref()
    }

    /// Display name of the player in seat `stone`.
    pub fn player_name(&self, stone: Stone) -> &str {
        self.players[stone.index()].name()
    }
}

/// The rejection `game` would raise for `action`, without consuming it.
fn rejection_of(game: &GameInProgress, action: &Action) -> Option<Rejection> {
    LegalAction::check(action, game).err()
}
