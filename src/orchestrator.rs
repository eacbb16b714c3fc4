//! Game orchestration between the human and the computer.

use crate::games::tictactoe::{GameState, Mark, MoveError, Outcome, Position};
use crate::players::{Player, PlayerAction};
use anyhow::Result;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(GameState),
    /// The computer is searching for a move.
    ComputerThinking,
    /// A move was not applied.
    MoveRejected {
        /// Requested position.
        position: Position,
        /// Why it was rejected.
        reason: MoveError,
    },
    /// The human typed something that is not a move or command.
    InputRejected {
        /// The raw input line.
        input: String,
    },
    /// Game reached a terminal outcome. Sent once, right after the final move.
    GameOver(Outcome),
    /// Board was reset to a new game.
    Restarted,
}

/// Runs a session: X is the human, O is the computer.
///
/// After every human move the orchestrator checks whether it is the
/// computer's turn in an unfinished game and, if so, asks the computer and
/// applies its answer. Finished games wait for the human to restart or quit.
pub struct Orchestrator {
    state: GameState,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            state: GameState::new(),
            human,
            computer,
            event_tx,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs until the human quits. Returns the outcome of the last game.
    #[instrument(skip(self), fields(human = %self.human.name(), computer = %self.computer.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.emit(GameEvent::StateChanged(self.state))?;

        loop {
            if self.state.is_over() || self.state.next() == Mark::X {
                match self.human.next_action(&self.state).await? {
                    PlayerAction::Place(position) => self.place(position)?,
                    PlayerAction::Restart => self.restart()?,
                    PlayerAction::Quit => break,
                    PlayerAction::Unrecognized(input) => {
                        self.emit(GameEvent::InputRejected { input })?
                    }
                }
                continue;
            }

            self.emit(GameEvent::ComputerThinking)?;
            match self.computer.next_action(&self.state).await? {
                PlayerAction::Place(position) => {
                    let next = self.state.try_move(position.to_index())?;
                    debug!(%position, "Computer moved");
                    self.advance(next)?;
                }
                other => anyhow::bail!("Computer returned {:?} instead of a move", other),
            }
        }

        info!(outcome = ?self.state.outcome(), "Session ended");
        Ok(self.state.outcome())
    }

    fn place(&mut self, position: Position) -> Result<()> {
        match self.state.try_move(position.to_index()) {
            Ok(next) => {
                debug!(%position, "Human moved");
                self.advance(next)
            }
            Err(reason) => {
                warn!(%position, %reason, "Move rejected");
                self.emit(GameEvent::MoveRejected { position, reason })
            }
        }
    }

    fn advance(&mut self, next: GameState) -> Result<()> {
        self.state = next;
        self.emit(GameEvent::StateChanged(self.state))?;
        if self.state.is_over() {
            self.emit(GameEvent::GameOver(self.state.outcome()))?;
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.state = self.state.reset();
        self.emit(GameEvent::Restarted)?;
        self.emit(GameEvent::StateChanged(self.state))
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}
