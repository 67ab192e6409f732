//! History manager tests - inverse law, capacity and redo invalidation

use tetris_art::core::{Board, History};
use tetris_art::types::{Color, HISTORY_LIMIT};

/// Board with `n` cells painted in reading order
fn board_with(n: usize) -> Board {
    let mut board = Board::new();
    for i in 0..n {
        board.set(i / board.cols(), i % board.cols(), Some(Color::Red)).unwrap();
    }
    board
}

#[test]
fn test_undo_redo_inverse() {
    let mut history = History::new();
    let b0 = board_with(0);
    let b1 = board_with(1);

    history.record_mutation(&b0);
    let undone = history.undo(&b1).unwrap();
    assert_eq!(undone, b0);

    let redone = history.redo(&undone).unwrap();
    assert_eq!(redone, b1);
}

#[test]
fn test_empty_stacks_are_noops() {
    let mut history = History::new();
    let board = board_with(2);
    assert_eq!(history.undo(&board), None);
    assert_eq!(history.redo(&board), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_bound_keeps_most_recent_twenty() {
    let mut history = History::new();
    for n in 0..25 {
        history.record_mutation(&board_with(n));
    }

    assert_eq!(history.undo_len(), HISTORY_LIMIT);
    let kept: Vec<usize> = history.undo_snapshots().map(Board::filled_count).collect();
    assert_eq!(kept, (5..25).collect::<Vec<_>>());
}

#[test]
fn test_redo_stack_is_bounded_too() {
    let mut history = History::new();
    for n in 0..25 {
        history.record_mutation(&board_with(n));
    }
    let mut current = board_with(25);
    while let Some(previous) = history.undo(&current) {
        current = previous;
    }
    assert_eq!(history.redo_len(), HISTORY_LIMIT);
    assert_eq!(current, board_with(5));
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut history = History::new();
    let b0 = board_with(0);
    let b1 = board_with(1);

    history.record_mutation(&b0);
    let current = history.undo(&b1).unwrap();
    assert!(history.can_redo());

    history.record_mutation(&current);
    assert_eq!(history.redo_len(), 0);
    assert_eq!(history.redo(&current), None);
}

#[test]
fn test_snapshots_are_isolated() {
    let mut history = History::new();
    let mut live = board_with(0);
    history.record_mutation(&live);

    live.set(0, 0, Some(Color::Cyan)).unwrap();
    let snapshot = history.undo_snapshots().next().unwrap();
    assert!(snapshot.is_blank());
}
