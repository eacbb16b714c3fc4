//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Place the player's mark.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Leave the session.
    Quit,
    /// Input that could not be understood, passed through for the UI to report.
    Unrecognized(String),
}

/// Trait for players that can act on a game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next action for the given state.
    async fn next_action(&mut self, state: &GameState) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
