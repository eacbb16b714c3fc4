//! Tests for tic-tac-toe position enum.

use noughts::{Board, GameState, Position};

#[test]
fn test_numbers_shown_on_board_select_that_cell() {
    let state = GameState::new().apply_move(4);
    let shown: Vec<String> = state
        .board()
        .display()
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    assert_eq!(shown, ["1", "2", "3", "4", "6", "7", "8", "9"]);

    let picked: Vec<_> = shown
        .iter()
        .filter_map(|n| Position::from_label_or_number(n))
        .collect();
    assert_eq!(picked, Position::valid_moves(state.board()));
}

#[test]
fn test_index_matches_board_cell() {
    let board: Board = "...|..X|...".parse().unwrap();
    let occupied: Vec<_> = Position::ALL
        .into_iter()
        .filter(|pos| !board.is_empty(pos.to_index()))
        .collect();
    assert_eq!(occupied, vec![Position::MiddleRight]);
    assert_eq!(Position::from_index(Position::MiddleRight.to_index()), Some(Position::MiddleRight));
}

#[test]
fn test_label_spelling_is_forgiving() {
    assert_eq!(Position::from_label_or_number("BOTTOM_left"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("top center"), Some(Position::TopCenter));
    assert_eq!(Position::from_label_or_number("-"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
}

#[test]
fn test_no_valid_moves_on_full_board() {
    let board: Board = "XOX|XOO|OXO".parse().unwrap();
    assert!(Position::valid_moves(&board).is_empty());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let state = GameState::new().apply_move(0).apply_move(4);

    let valid = Position::valid_moves(state.board());
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_labels_display() {
    assert_eq!(Position::MiddleRight.to_string(), "Middle-right");
    assert_eq!(Position::from_label_or_number("middle-right"), Some(Position::MiddleRight));
}
