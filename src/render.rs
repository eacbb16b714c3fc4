//! Text rendering of game events for the terminal.

use crate::config::PlayConfig;
use crate::games::tictactoe::{GameState, Mark, Outcome};
use crate::orchestrator::GameEvent;
use tokio::sync::mpsc;
use tracing::warn;

/// Status line shown under the board.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        Outcome::InProgress => format!("Next player: {}", state.next()),
        Outcome::Won(mark) => format!("Winner: {}", mark),
        Outcome::Draw => "Cat's game".to_string(),
    }
}

/// Renders one event as text, or `None` if it has nothing to show.
pub fn render_event(event: &GameEvent, config: &PlayConfig) -> Option<String> {
    match event {
        GameEvent::StateChanged(state) => {
            let mut out = format!("\n{}\n\nSTATUS: {}", state.board().display(), status_line(state));
            if !state.is_over() && state.next() == Mark::X {
                out.push_str(&format!("\n{}, pick a square (1-9), r to restart, q to quit:", config.human_name()));
            }
            Some(out)
        }
        GameEvent::ComputerThinking => Some(format!("{} is thinking...", config.computer_name())),
        GameEvent::MoveRejected { position, reason } => {
            Some(format!("Can't play {}: {}", position, reason))
        }
        GameEvent::GameOver(outcome) => {
            let headline = match outcome {
                Outcome::Won(Mark::X) => format!("{} won!", config.human_name()),
                Outcome::Won(Mark::O) => format!("{} won!", config.computer_name()),
                Outcome::Draw => "Nobody wins.".to_string(),
                Outcome::InProgress => return None,
            };
            Some(format!("{} Press r to restart or q to quit.", headline))
        }
        GameEvent::InputRejected { input } => Some(format!(
            "Unrecognized input {:?}: enter 1-9, a cell name, r or q",
            input
        )),
        GameEvent::Restarted => Some("New game.".to_string()),
    }
}

/// Prints events until the orchestrator drops its sender.
pub async fn run_renderer(mut rx: mpsc::UnboundedReceiver<GameEvent>, config: PlayConfig) {
    while let Some(event) = rx.recv().await {
        if *config.json_events() {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!(error = %e, "Failed to serialize event"),
            }
        } else if let Some(text) = render_event(&event, &config) {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let state = GameState::new();
        assert_eq!(status_line(&state), "Next player: X");

        let state = state.apply_move(4);
        assert_eq!(status_line(&state), "Next player: O");

        let won = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), GameState::apply_move);
        assert_eq!(status_line(&won), "Winner: X");

        let drawn = [4, 0, 2, 6, 3, 5, 1, 7, 8]
            .into_iter()
            .fold(GameState::new(), GameState::apply_move);
        assert_eq!(status_line(&drawn), "Cat's game");
    }

    #[test]
    fn test_render_prompts_human_only_on_their_turn() {
        let config = PlayConfig::default();
        let state = GameState::new();
        let text = render_event(&GameEvent::StateChanged(state), &config).unwrap();
        assert!(text.contains("You, pick a square"));

        let text = render_event(&GameEvent::StateChanged(state.apply_move(0)), &config).unwrap();
        assert!(!text.contains("pick a square"));
        assert!(text.starts_with("\nX|2|3"));
    }

    #[test]
    fn test_game_over_headline_uses_configured_names() {
        let file_config: PlayConfig = toml::from_str("human_name = \"Ada\"").unwrap();
        let text = render_event(&GameEvent::GameOver(Outcome::Won(Mark::X)), &file_config).unwrap();
        assert!(text.starts_with("Ada won!"), "{}", text);

        let text = render_event(&GameEvent::GameOver(Outcome::Won(Mark::O)), &file_config).unwrap();
        assert!(text.starts_with("Computer won!"), "{}", text);
    }

    #[test]
    fn test_unrecognized_input_is_rendered_and_serialized() {
        let event = GameEvent::InputRejected {
            input: "banana".to_string(),
        };
        let text = render_event(&event, &PlayConfig::default()).unwrap();
        assert!(text.contains("\"banana\""));

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"input_rejected","data":{"input":"banana"}}"#);
    }
}
