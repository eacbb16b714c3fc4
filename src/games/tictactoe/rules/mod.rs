//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They hold no state and are
//! shared by the state machine and the search.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate_outcome};
