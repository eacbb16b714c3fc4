//! Outcome invariant: the cached outcome is a pure function of the board.

use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: the stored outcome equals the outcome recomputed from the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == Outcome::of(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
