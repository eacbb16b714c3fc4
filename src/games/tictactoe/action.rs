//! Move and board-text errors for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not in 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than X, O, or an empty marker.
    #[display("Invalid board character {:?} (expected X, O, '.', '_' or '-')", _0)]
    InvalidChar(#[error(not(source))] char),

    /// The board did not contain exactly nine cells.
    #[display("Board has {} cells, expected 9", _0)]
    WrongLength(#[error(not(source))] usize),
}
