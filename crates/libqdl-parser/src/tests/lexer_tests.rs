//! Tests for the lexer: classifier priority, numeric grammar
//! boundaries, string/block-string handling, trivia, and the
//! total-coverage property.

use crate::token::QdlTokenKind;
use crate::token::QdlTriviaTokenKind;
use crate::QdlLexer;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<QdlTokenKind<'_>> {
    QdlLexer::tokenize(source)
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

/// Concatenates the source slices of every trivia and token span, in
/// order.
fn reconstruct(source: &str) -> String {
    let mut out = String::new();
    for token in QdlLexer::tokenize(source) {
        for trivia in &token.preceding_trivia {
            out.push_str(trivia.span.source_slice(source));
        }
        out.push_str(token.span.source_slice(source));
    }
    out
}

// =============================================================================
// Punctuators and names
// =============================================================================

#[test]
fn lex_all_punctuators() {
    assert_eq!(
        kinds("! $ ( ) ... : = @ [ ] { | } &"),
        vec![
            QdlTokenKind::Bang,
            QdlTokenKind::Dollar,
            QdlTokenKind::ParenOpen,
            QdlTokenKind::ParenClose,
            QdlTokenKind::Ellipsis,
            QdlTokenKind::Colon,
            QdlTokenKind::Equals,
            QdlTokenKind::At,
            QdlTokenKind::SquareBracketOpen,
            QdlTokenKind::SquareBracketClose,
            QdlTokenKind::CurlyBraceOpen,
            QdlTokenKind::Pipe,
            QdlTokenKind::CurlyBraceClose,
            QdlTokenKind::Ampersand,
            QdlTokenKind::Eof,
        ],
    );
}

#[test]
fn lex_names() {
    assert_eq!(
        kinds("_foo Bar9 __typename"),
        vec![
            QdlTokenKind::Name("_foo"),
            QdlTokenKind::Name("Bar9"),
            QdlTokenKind::Name("__typename"),
            QdlTokenKind::Eof,
        ],
    );
}

/// A lone dot is not a token at all; it degrades to a one-character
/// error token.
#[test]
fn lex_lone_dot_is_an_error() {
    let tokens = QdlLexer::tokenize(".");
    assert!(matches!(tokens[0].kind, QdlTokenKind::Error { .. }));
    assert_eq!(tokens[0].span.len(), 1);
    assert!(tokens[1].is_eof());
}

// =============================================================================
// Numbers
// =============================================================================

/// `1234.5` must lex as a single float, never as INT `.` INT.
#[test]
fn lex_float_takes_priority_over_int() {
    assert_eq!(
        kinds("1234.5"),
        vec![QdlTokenKind::FloatValue("1234.5"), QdlTokenKind::Eof],
    );
}

/// The integer grammar forbids leading zeros on multi-digit numbers, so
/// `01` is two tokens.
#[test]
fn lex_leading_zero_is_two_ints() {
    assert_eq!(
        kinds("01"),
        vec![
            QdlTokenKind::IntValue("0"),
            QdlTokenKind::IntValue("1"),
            QdlTokenKind::Eof,
        ],
    );
}

#[test]
fn lex_negative_zero_is_one_int() {
    assert_eq!(
        kinds("-0"),
        vec![QdlTokenKind::IntValue("-0"), QdlTokenKind::Eof],
    );
}

#[test]
fn lex_floats_with_fraction_and_exponent() {
    assert_eq!(
        kinds("1e10 2.5e-3 -0.5"),
        vec![
            QdlTokenKind::FloatValue("1e10"),
            QdlTokenKind::FloatValue("2.5e-3"),
            QdlTokenKind::FloatValue("-0.5"),
            QdlTokenKind::Eof,
        ],
    );
}

/// The lexical float grammar allows empty digit runs after `.` and the
/// exponent marker; rejecting those is the numeric parse's job.
#[test]
fn lex_degenerate_floats() {
    assert_eq!(
        kinds("1. 1e"),
        vec![
            QdlTokenKind::FloatValue("1."),
            QdlTokenKind::FloatValue("1e"),
            QdlTokenKind::Eof,
        ],
    );
}

#[test]
fn lex_lone_minus_is_an_error() {
    let tokens = QdlLexer::tokenize("-");
    assert!(matches!(tokens[0].kind, QdlTokenKind::Error { .. }));
    assert_eq!(tokens[0].span.len(), 1);
}

// =============================================================================
// Booleans
// =============================================================================

#[test]
fn lex_booleans() {
    assert_eq!(
        kinds("true false"),
        vec![
            QdlTokenKind::BooleanValue(true),
            QdlTokenKind::BooleanValue(false),
            QdlTokenKind::Eof,
        ],
    );
}

/// The boolean classifier runs before the name classifier and is a
/// plain prefix match, so `trueish` is a boolean followed by a name.
#[test]
fn lex_boolean_takes_priority_over_name() {
    assert_eq!(
        kinds("trueish"),
        vec![
            QdlTokenKind::BooleanValue(true),
            QdlTokenKind::Name("ish"),
            QdlTokenKind::Eof,
        ],
    );
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn lex_string() {
    let tokens = QdlLexer::tokenize(r#""hello""#);
    assert_eq!(tokens[0].kind, QdlTokenKind::StringValue(r#""hello""#));
    assert_eq!(tokens[0].kind.string_content(), Some("hello"));
}

/// Escape sequences are validated by the lexer but kept as written in
/// the literal.
#[test]
fn lex_string_with_escapes() {
    let tokens = QdlLexer::tokenize(r#""a\n\t\\\" bé""#);
    assert!(matches!(tokens[0].kind, QdlTokenKind::StringValue(_)));
    assert_eq!(
        tokens[0].kind.string_content(),
        Some(r#"a\n\t\\\" bé"#),
    );
    assert!(tokens[1].is_eof());
}

#[test]
fn lex_string_with_bad_escape() {
    let tokens = QdlLexer::tokenize(r#""a\qb""#);
    let QdlTokenKind::Error { message } = &tokens[0].kind else {
        panic!("expected an error token, got {:?}", tokens[0].kind);
    };
    assert_eq!(message, r"unsupported escape sequence `\q`");
}

#[test]
fn lex_string_with_bad_unicode_escape() {
    let tokens = QdlLexer::tokenize(r#""\u00g9""#);
    let QdlTokenKind::Error { message } = &tokens[0].kind else {
        panic!("expected an error token, got {:?}", tokens[0].kind);
    };
    assert_eq!(message, "invalid unicode escape in string literal");
}

/// An unterminated string consumes the rest of the input as the
/// best-effort span, so the error can point somewhere useful.
#[test]
fn lex_unterminated_string() {
    let tokens = QdlLexer::tokenize(r#""abc"#);
    let QdlTokenKind::Error { message } = &tokens[0].kind else {
        panic!("expected an error token, got {:?}", tokens[0].kind);
    };
    assert_eq!(message, "unterminated string literal");
    assert_eq!(tokens[0].span.len(), 4);
}

#[test]
fn lex_string_with_raw_newline() {
    let tokens = QdlLexer::tokenize("\"ab\ncd\"");
    let QdlTokenKind::Error { message } = &tokens[0].kind else {
        panic!("expected an error token, got {:?}", tokens[0].kind);
    };
    assert_eq!(message, "raw newline in string literal");
    // Lexing continues past the defect.
    assert_eq!(tokens[1].kind, QdlTokenKind::Name("cd"));
}

// =============================================================================
// Block strings
// =============================================================================

#[test]
fn lex_block_string() {
    let tokens = QdlLexer::tokenize(r#""""abc""""#);
    assert!(matches!(tokens[0].kind, QdlTokenKind::BlockStringValue(_)));
    assert_eq!(tokens[0].kind.string_content(), Some("abc"));
}

#[test]
fn lex_block_string_spanning_lines() {
    let tokens = QdlLexer::tokenize("\"\"\"a\nb\"\"\"");
    assert_eq!(tokens[0].kind.string_content(), Some("a\nb"));
    assert!(tokens[1].is_eof());
}

/// `\"""` must not terminate a block string; the content keeps the
/// escaped sequence literally.
#[test]
fn lex_block_string_with_escaped_terminator() {
    // `"""` + `a` + `\"""` + `"""`
    let source = "\"\"\"a\\\"\"\"\"\"\"";
    let tokens = QdlLexer::tokenize(source);
    assert!(matches!(tokens[0].kind, QdlTokenKind::BlockStringValue(_)));
    assert_eq!(tokens[0].kind.string_content(), Some("a\\\"\"\""));
    assert!(tokens[1].is_eof());
}

/// An unterminated block string falls back to the plain string
/// classifier, which sees the leading `""` as an empty string.
#[test]
fn lex_unterminated_block_string_degrades_to_empty_string() {
    let tokens = QdlLexer::tokenize(r#""""abc"#);
    assert_eq!(tokens[0].kind, QdlTokenKind::StringValue(r#""""#));
    assert!(matches!(tokens[1].kind, QdlTokenKind::Error { .. }));
    assert!(tokens[2].is_eof());
}

// =============================================================================
// Trivia
// =============================================================================

#[test]
fn lex_commas_and_whitespace_as_trivia() {
    let tokens = QdlLexer::tokenize("a, b");
    assert_eq!(tokens[0].kind, QdlTokenKind::Name("a"));
    assert_eq!(tokens[1].kind, QdlTokenKind::Name("b"));
    let trivia_kinds: Vec<_> = tokens[1]
        .preceding_trivia
        .iter()
        .map(|trivia| trivia.kind)
        .collect();
    assert_eq!(
        trivia_kinds,
        vec![QdlTriviaTokenKind::Comma, QdlTriviaTokenKind::Whitespace],
    );
}

#[test]
fn lex_trailing_trivia_attaches_to_eof() {
    let tokens = QdlLexer::tokenize("a # note\n");
    let eof = tokens.last().unwrap();
    assert!(eof.is_eof());
    let trivia_kinds: Vec<_> = eof
        .preceding_trivia
        .iter()
        .map(|trivia| trivia.kind)
        .collect();
    assert_eq!(
        trivia_kinds,
        vec![
            QdlTriviaTokenKind::Whitespace,
            QdlTriviaTokenKind::Comment,
            QdlTriviaTokenKind::Newline,
        ],
    );
}

#[test]
fn lex_crlf_is_one_newline() {
    let tokens = QdlLexer::tokenize("a\r\nb");
    let trivia: Vec<_> = tokens[1]
        .preceding_trivia
        .iter()
        .map(|trivia| (trivia.kind, trivia.span.len()))
        .collect();
    assert_eq!(trivia, vec![(QdlTriviaTokenKind::Newline, 2)]);
    assert_eq!(tokens[1].span.start_inclusive.line(), 1);
}

// =============================================================================
// Total coverage
// =============================================================================

#[test]
fn tokenize_covers_mixed_input() {
    let source = "type T { f: [Int!]! } # done\n\"str\" 1.5, true %";
    assert_eq!(reconstruct(source), source);
}

#[test]
fn tokenize_covers_garbage_input() {
    let source = "\u{1f600}\\ ~ \"unterminated";
    assert_eq!(reconstruct(source), source);
}

proptest! {
    /// For any input, repeated scanning consumes the entire buffer with
    /// no byte skipped: concatenating every trivia and token slice
    /// reconstructs the input exactly.
    #[test]
    fn tokenize_covers_entire_input(source in any::<String>()) {
        prop_assert_eq!(reconstruct(&source), source);
    }

    /// Tokenization terminates and always ends with exactly one Eof.
    #[test]
    fn tokenize_terminates_with_single_eof(source in any::<String>()) {
        let tokens = QdlLexer::tokenize(&source);
        prop_assert!(tokens.last().unwrap().is_eof());
        let eof_count = tokens.iter().filter(|token| token.is_eof()).count();
        prop_assert_eq!(eof_count, 1);
    }
}
