//! Alternating turn invariant: X on even move counts, O on odd.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the cached next mark follows move parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.next() == Mark::for_move_count(state.board().occupied_count())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
