//! Core domain types for tic-tac-toe.

use super::action::{BoardParseError, MoveError};
use super::invariants::{GameStateInvariants, InvariantSet};
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// First mover, played by the human.
    X,
    /// Second mover, played by the computer.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark that moves after `moves` successful placements.
    pub fn for_move_count(moves: usize) -> Self {
        if moves % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from explicit squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in `0..9`.
    pub fn get(&self, cell: usize) -> Square {
        self.squares[cell]
    }

    /// Sets the square at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in `0..9`.
    pub(crate) fn set(&mut self, cell: usize, square: Square) {
        self.squares[cell] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&cell| self.is_empty(cell))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                let symbol = match self.squares[cell] {
                    Square::Empty => (cell + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Parses the compact form: nine cells of `X`, `O`, or `.`/`_`/`-`.
///
/// Whitespace and `|` separators are ignored, so `"XX.|OO.|..."` is accepted.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            if count == CELLS {
                return Err(BoardParseError::WrongLength(count + 1));
            }
            squares[count] = square;
            count += 1;
        }
        if count != CELLS {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(Self { squares })
    }
}

/// Current outcome of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Computes the outcome from the board alone.
    pub fn of(board: &Board) -> Self {
        if let Some(mark) = rules::evaluate_outcome(board) {
            Outcome::Won(mark)
        } else if rules::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// Passed by value: every transition consumes the state and returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next: Mark,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn next(&self) -> Mark {
        self.next
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Places the next mark at `cell`, or reports why the move is illegal.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell` is not in `0..9`
    /// - [`MoveError::GameOver`] if the game is already won or drawn
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(mover = %self.next))]
    pub fn try_move(self, cell: usize) -> Result<Self, MoveError> {
        if cell >= CELLS {
            return Err(MoveError::OutOfBounds(cell));
        }
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::SquareOccupied(cell));
        }

        let mut next = self;
        next.board.set(cell, Square::Occupied(self.next));
        next.outcome = Outcome::of(&next.board);
        next.next = self.next.opponent();

        debug_assert!(
            GameStateInvariants::check_all(&next).is_ok(),
            "game state invariants violated after move at {}",
            cell
        );
        debug!(state = ?next, "State changed");
        Ok(next)
    }

    /// Places the next mark at `cell`.
    ///
    /// Moves onto an occupied cell or into a finished game are ignored and the
    /// state is returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn apply_move(self, cell: usize) -> Self {
        match self.try_move(cell) {
            Ok(next) => next,
            Err(MoveError::OutOfBounds(cell)) => {
                panic!("cell index {} out of range (must be 0-8)", cell)
            }
            Err(err) => {
                debug!(%err, "Move ignored");
                self
            }
        }
    }

    /// Returns the initial state.
    #[instrument(skip(self))]
    pub fn reset(self) -> Self {
        Self::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts a new game.
pub fn new_game() -> GameState {
    GameState::new()
}
