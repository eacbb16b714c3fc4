//! Tests for human/computer turn sequencing.

use noughts::{
    ComputerPlayer, GameEvent, GameState, Mark, MoveError, Orchestrator, Outcome, Player,
    PlayerAction, Position,
};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Player that replays a fixed list of actions, then quits.
struct ScriptedPlayer {
    actions: VecDeque<PlayerAction>,
}

impl ScriptedPlayer {
    fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn next_action(&mut self, _state: &GameState) -> anyhow::Result<PlayerAction> {
        Ok(self.actions.pop_front().unwrap_or(PlayerAction::Quit))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn place(index: usize) -> PlayerAction {
    PlayerAction::Place(Position::from_index(index).unwrap())
}

async fn run_script(
    actions: Vec<PlayerAction>,
) -> (anyhow::Result<Outcome>, Vec<GameEvent>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let human = ScriptedPlayer::new(actions);
    let computer = ComputerPlayer::new("cpu", Duration::ZERO);
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), tx);
    let outcome = orchestrator.run().await;
    drop(orchestrator);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    (outcome, events)
}

fn states(events: &[GameEvent]) -> Vec<GameState> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::StateChanged(state) => Some(*state),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_computer_answers_each_human_move() {
    let (outcome, events) = run_script(vec![place(4)]).await;
    assert_eq!(outcome.unwrap(), Outcome::InProgress);

    let states = states(&events);
    // initial, after X, after O
    assert_eq!(states.len(), 3);
    assert_eq!(states[1].board().occupied_count(), 1);
    assert_eq!(states[2].board().occupied_count(), 2);
    assert_eq!(states[2].next(), Mark::X);
    assert!(events.contains(&GameEvent::ComputerThinking));
}

#[tokio::test]
async fn test_occupied_square_is_reported_not_applied() {
    let (_, events) = run_script(vec![place(4), place(4)]).await;
    assert!(events.contains(&GameEvent::MoveRejected {
        position: Position::Center,
        reason: MoveError::SquareOccupied(4),
    }));
    let last = *states(&events).last().unwrap();
    assert_eq!(last.board().occupied_count(), 2);
}

#[tokio::test]
async fn test_computer_punishes_bad_play() {
    // X opens on an edge and never defends. Moves onto taken cells and moves
    // after the game ends are rejected.
    let actions = [1, 2, 3, 5, 6, 7, 8].into_iter().map(place).collect();
    let (outcome, events) = run_script(actions).await;
    assert_eq!(outcome.unwrap(), Outcome::Won(Mark::O));
    assert!(events.contains(&GameEvent::GameOver(Outcome::Won(Mark::O))));
}

#[tokio::test]
async fn test_restart_after_game_over() {
    let mut actions: Vec<_> = [1, 2, 3, 5, 6, 7, 8].into_iter().map(place).collect();
    actions.push(PlayerAction::Restart);
    let (outcome, events) = run_script(actions).await;

    // Script runs out after the restart, so the session ends on a fresh board.
    assert!(events.contains(&GameEvent::Restarted));
    assert_eq!(outcome.unwrap(), Outcome::InProgress);
    assert_eq!(*states(&events).last().unwrap(), GameState::new());
}

#[tokio::test]
async fn test_game_over_sent_once_per_game() {
    // Three more moves arrive after O completes the left column.
    let actions = [1, 2, 3, 5, 6, 7, 8].into_iter().map(place).collect();
    let (_, events) = run_script(actions).await;

    let game_overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver(_)))
        .count();
    assert_eq!(game_overs, 1);

    let over_at = events
        .iter()
        .position(|e| matches!(e, GameEvent::GameOver(_)))
        .unwrap();
    assert!(matches!(events[over_at - 1], GameEvent::StateChanged(state) if state.is_over()));
    let late_rejections = events[over_at..]
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveRejected { .. }))
        .count();
    assert_eq!(late_rejections, 3);
}

#[tokio::test]
async fn test_unrecognized_input_becomes_an_event() {
    let actions = vec![PlayerAction::Unrecognized("banana".to_string()), place(4)];
    let (outcome, events) = run_script(actions).await;
    assert_eq!(outcome.unwrap(), Outcome::InProgress);

    assert_eq!(
        events[1],
        GameEvent::InputRejected {
            input: "banana".to_string()
        }
    );
    // The bad line costs no turn.
    assert_eq!(states(&events)[1].board().occupied_count(), 1);
}
