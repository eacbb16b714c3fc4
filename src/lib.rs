//! Noughts - tic-tac-toe against a perfect computer opponent.
//!
//! # Architecture
//!
//! - **Games**: the board state machine and the minimax search
//! - **Players**: human (line input) and computer (search) players
//! - **Orchestrator**: sequences human and computer turns, emits events
//! - **Render**: turns events into terminal output
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, Outcome, best_move};
//!
//! let state = GameState::new().apply_move(4);
//! let reply = best_move(state.board(), true);
//! let state = state.apply_move(reply.cell().unwrap());
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod orchestrator;
mod players;
mod render;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game engine
pub use games::tictactoe::{
    Board, BoardParseError, CELLS, GameState, Mark, MoveError, MoveEvaluation, Outcome,
    Position, Score, Square, best_move, evaluate_outcome, new_game,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameStateInvariants, Invariant, InvariantSet, InvariantViolation,
    OutcomeConsistentInvariant,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{LINES, is_full};

// Crate-level exports - Session
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerAction};
pub use render::{render_event, run_renderer, status_line};
