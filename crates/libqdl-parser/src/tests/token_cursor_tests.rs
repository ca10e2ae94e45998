//! Tests for the lookahead cursor, including its idempotent
//! end-of-input behavior.

use crate::token::QdlTokenKind;
use crate::QdlTokenCursor;

#[test]
fn peek_does_not_consume() {
    let cursor = QdlTokenCursor::new("a b");
    assert_eq!(cursor.peek().kind, QdlTokenKind::Name("a"));
    assert_eq!(cursor.peek().kind, QdlTokenKind::Name("a"));
}

#[test]
fn peek_nth_is_bounded_lookahead() {
    let cursor = QdlTokenCursor::new("a b c");
    assert_eq!(cursor.peek_nth(0).kind, QdlTokenKind::Name("a"));
    assert_eq!(cursor.peek_nth(1).kind, QdlTokenKind::Name("b"));
    assert_eq!(cursor.peek_nth(2).kind, QdlTokenKind::Name("c"));
    // Lookahead past the end sees Eof, not a panic.
    assert_eq!(cursor.peek_nth(10).kind, QdlTokenKind::Eof);
}

#[test]
fn advance_returns_and_consumes() {
    let mut cursor = QdlTokenCursor::new("a b");
    assert_eq!(cursor.advance().kind, QdlTokenKind::Name("a"));
    assert_eq!(cursor.advance().kind, QdlTokenKind::Name("b"));
    assert!(cursor.is_at_end());
}

/// Past end of input, every peek/advance returns the end-of-input token
/// indefinitely.
#[test]
fn advance_past_eof_is_idempotent() {
    let mut cursor = QdlTokenCursor::new("a");
    assert_eq!(cursor.advance().kind, QdlTokenKind::Name("a"));
    for _ in 0..5 {
        assert_eq!(cursor.advance().kind, QdlTokenKind::Eof);
        assert!(cursor.is_at_end());
    }
}

#[test]
fn empty_input_is_immediately_at_end() {
    let cursor = QdlTokenCursor::new("");
    assert!(cursor.is_at_end());
}

#[test]
fn from_tokens_appends_missing_eof() {
    let cursor = QdlTokenCursor::from_tokens(Vec::new());
    assert!(cursor.is_at_end());
}
