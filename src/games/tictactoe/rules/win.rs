//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};

/// The eight winning lines as cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if any line is fully owned by one mark.
///
/// Returns `Some(mark)` for the first complete line in [`LINES`] order,
/// `None` otherwise. Draws and games in progress are not told apart here.
pub fn evaluate_outcome(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(mark);
        }
    }

    None
}
