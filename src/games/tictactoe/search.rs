//! Exhaustive minimax search for the computer player.
//!
//! The computer plays O and is the maximizing side. Scores are always -1, 0
//! or +1 and are reported from O's point of view: +1 means O wins with best
//! play, -1 means X does.

use super::rules;
use super::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax score: -1, 0 or +1.
pub type Score = i8;

/// A candidate move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvaluation {
    /// Chosen cell (0-8). `None` only when the searched board was terminal.
    cell: Option<usize>,
    /// Score of the position after playing `cell`.
    score: Score,
}

impl MoveEvaluation {
    /// Returns the chosen cell.
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// Returns the score.
    pub fn score(&self) -> Score {
        self.score
    }

    fn terminal(score: Score) -> Self {
        Self { cell: None, score }
    }
}

/// Finds the optimal move for the side to play.
///
/// `maximizing` selects the side: `true` places O and maximizes the score,
/// `false` places X and minimizes it. Empty cells are tried in ascending
/// order and the first cell reaching the best score wins ties, except that a
/// cell completing a line for the side to move is always preferred: the score
/// is the same, but the game ends now instead of a few plies later.
///
/// The caller's board is never modified; the search runs on its own copy.
///
/// If a line is already complete the previous mover has won, so the result is
/// -1 when `maximizing` and +1 otherwise. A full board without a line scores 0.
/// In both cases `cell` is `None`.
#[instrument(skip(board), fields(cells = %board))]
pub fn best_move(board: &Board, maximizing: bool) -> MoveEvaluation {
    let mut scratch = *board;
    let result = search(&mut scratch, maximizing);
    debug_assert_eq!(scratch, *board, "search must restore its scratch board");
    debug!(cell = ?result.cell, score = result.score, "Search complete");
    result
}

fn search(board: &mut Board, maximizing: bool) -> MoveEvaluation {
    if rules::evaluate_outcome(board).is_some() {
        return MoveEvaluation::terminal(if maximizing { -1 } else { 1 });
    }
    if rules::is_full(board) {
        return MoveEvaluation::terminal(0);
    }

    let mark = if maximizing { Mark::O } else { Mark::X };
    if let Some(cell) = winning_cell(board, mark) {
        return MoveEvaluation {
            cell: Some(cell),
            score: if maximizing { 1 } else { -1 },
        };
    }

    let mut best: Option<MoveEvaluation> = None;

    for cell in 0..board.squares().len() {
        if !board.is_empty(cell) {
            continue;
        }

        board.set(cell, Square::Occupied(mark));
        let score = search(board, !maximizing).score;
        board.set(cell, Square::Empty);

        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(MoveEvaluation {
                cell: Some(cell),
                score,
            });
        }
    }

    // A board with no line and no empty cell returned above, so at least one
    // candidate was scored.
    best.unwrap_or_else(|| unreachable!("non-terminal board has an empty cell"))
}

/// Lowest empty cell that completes a line for `mark`.
fn winning_cell(board: &mut Board, mark: Mark) -> Option<usize> {
    (0..board.squares().len()).find(|&cell| {
        if !board.is_empty(cell) {
            return false;
        }
        board.set(cell, Square::Occupied(mark));
        let wins = rules::evaluate_outcome(board) == Some(mark);
        board.set(cell, Square::Empty);
        wins
    })
}
