//! Tic-tac-toe: board state machine, rules, and minimax search.

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{BoardParseError, MoveError};
pub use position::Position;
pub use rules::evaluate_outcome;
pub use search::{MoveEvaluation, Score, best_move};
pub use types::{Board, CELLS, GameState, Mark, Outcome, Square, new_game};
