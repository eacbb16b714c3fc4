//! Human player reading commands line by line.

use super::{Player, PlayerAction};
use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// Human player typing moves on a line-oriented input.
///
/// Accepts a cell number 1-9 or a label such as `center`, plus `r`/`restart`
/// and `q`/`quit`. Anything else comes back as [`PlayerAction::Unrecognized`].
/// End of input counts as quitting.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl HumanPlayer<BufReader<Stdin>> {
    /// Creates a human player reading from standard input.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

/// Parses one line of input. `None` means the line was not understood.
pub fn parse_action(line: &str) -> Option<PlayerAction> {
    match line.trim().to_lowercase().as_str() {
        "r" | "restart" => Some(PlayerAction::Restart),
        "q" | "quit" | "exit" => Some(PlayerAction::Quit),
        other => Position::from_label_or_number(other).map(PlayerAction::Place),
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_action(&mut self, _state: &GameState) -> Result<PlayerAction> {
        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let action = parse_action(&line)
                .unwrap_or_else(|| PlayerAction::Unrecognized(line.trim().to_string()));
            debug!(player = %self.name, ?action, "Human input");
            return Ok(action);
        }

        debug!(player = %self.name, "Input closed");
        Ok(PlayerAction::Quit)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("5"), Some(PlayerAction::Place(Position::Center)));
        assert_eq!(parse_action(" Top-Left "), Some(PlayerAction::Place(Position::TopLeft)));
        assert_eq!(parse_action("R"), Some(PlayerAction::Restart));
        assert_eq!(parse_action("quit"), Some(PlayerAction::Quit));
        assert_eq!(parse_action("banana"), None);
    }

    #[tokio::test]
    async fn test_reports_bad_lines_and_quits_at_eof() {
        let input: &[u8] = b"\nnope\n9\n";
        let mut human = HumanPlayer::new("tester", input);
        let state = GameState::new();
        assert_eq!(
            human.next_action(&state).await.unwrap(),
            PlayerAction::Unrecognized("nope".to_string())
        );
        assert_eq!(
            human.next_action(&state).await.unwrap(),
            PlayerAction::Place(Position::BottomRight)
        );
        assert_eq!(human.next_action(&state).await.unwrap(), PlayerAction::Quit);
    }
}
