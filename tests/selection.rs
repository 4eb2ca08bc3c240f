//! Selection tests - cursor updates, selection updates, extension, word selection

mod common;

use common::{test_engine, test_engine_with_selection};
use quill::Selection;

#[test]
fn test_update_cursor_clears_selection() {
    let mut engine = test_engine_with_selection("hello world", 0, 5);
    engine.update_cursor(8);

    assert_eq!(engine.cursor(), 8);
    assert!(!engine.is_selection_active());
    assert_eq!(engine.selection(), Selection::new(0, 0));
}

#[test]
fn test_update_cursor_clamps_past_end() {
    let mut engine = test_engine("hi", 0);
    engine.update_cursor(10);

    assert_eq!(engine.cursor(), 2);
    engine.insert('!');
    assert_eq!(engine.text(), "hi!");
}

#[test]
fn test_update_selection_moves_cursor_to_end() {
    let mut engine = test_engine("hello world", 0);
    engine.update_selection(2, 7);

    assert!(engine.is_selection_active());
    assert_eq!(engine.selection(), Selection::new(2, 7));
    assert_eq!(engine.cursor(), 7);
}

#[test]
fn test_update_selection_backwards_keeps_order() {
    let mut engine = test_engine("hello world", 0);
    engine.update_selection(7, 2);

    assert_eq!(engine.selection(), Selection::new(7, 2));
    assert_eq!(engine.selection().range(), 2..7);
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_degenerate_selection_becomes_cursor() {
    let mut engine = test_engine_with_selection("hello world", 0, 5);
    engine.update_selection(3, 3);

    assert!(!engine.is_selection_active());
    assert_eq!(engine.cursor(), 3);
}

#[test]
fn test_extend_selection_from_cursor() {
    let mut engine = test_engine("hello world", 4);
    engine.extend_selection(6);

    assert!(engine.is_selection_active());
    assert_eq!(engine.selection(), Selection::new(4, 6));
    assert_eq!(engine.cursor(), 6);
}

#[test]
fn test_extend_active_selection_keeps_base() {
    // Matches shift+arrow growing an existing selection
    let mut engine = test_engine_with_selection("r4n\td. 0m", 1, 3);
    engine.extend_selection(6);

    assert_eq!(engine.selection(), Selection::new(1, 6));
}

#[test]
fn test_extend_selection_back_to_base_collapses() {
    let mut engine = test_engine("hello", 2);
    engine.extend_selection(3);
    engine.extend_selection(2);

    assert!(!engine.is_selection_active());
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_select_word_in_word() {
    let mut engine = test_engine("hello world", 0);
    engine.select_word_at(2);

    assert_eq!(engine.selection(), Selection::new(0, 5));
    assert!(engine.is_selection_active());
}

#[test]
fn test_select_word_on_space() {
    let mut engine = test_engine("hello world", 0);
    engine.select_word_at(5);

    assert_eq!(engine.selection(), Selection::new(5, 6));
}

#[test]
fn test_select_word_multiple_words() {
    let mut engine = test_engine("random word is", 0);
    engine.select_word_at(3);
    assert_eq!(engine.selection(), Selection::new(0, 6));

    engine.select_word_at(6);
    assert_eq!(engine.selection(), Selection::new(6, 7));
}

#[test]
fn test_select_word_at_end_of_buffer() {
    let mut engine = test_engine("hello world", 0);
    engine.select_word_at(11);

    assert_eq!(engine.selection(), Selection::new(6, 11));
}

#[test]
fn test_select_word_in_empty_buffer() {
    let mut engine = test_engine("", 0);
    engine.select_word_at(0);

    assert!(!engine.is_selection_active());
    assert_eq!(engine.cursor(), 0);
}
