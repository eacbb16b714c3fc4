//! Computer player backed by the minimax search.

use super::{Player, PlayerAction};
use crate::games::tictactoe::{GameState, Mark, Position, best_move};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Perfect player for O.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that pauses for `delay` before answering.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn next_action(&mut self, state: &GameState) -> Result<PlayerAction> {
        debug!(ai = %self.name, "Computer making move");

        // Search first, then sleep the remainder so the pause is cosmetic only.
        let maximizing = state.next() == Mark::O;
        let started = tokio::time::Instant::now();
        let eval = best_move(state.board(), maximizing);
        tokio::time::sleep_until(started + self.delay).await;

        let Some(cell) = eval.cell() else {
            anyhow::bail!("No valid moves available")
        };
        let position = Position::from_index(cell)
            .ok_or_else(|| anyhow::anyhow!("Search returned invalid cell {}", cell))?;

        debug!(ai = %self.name, %position, score = eval.score(), "Computer chose position");
        Ok(PlayerAction::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
