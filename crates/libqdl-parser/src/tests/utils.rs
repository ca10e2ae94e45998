//! Shared helpers for parser tests.

use crate::ast::Document;
use crate::ParseResult;

/// Parses `source`, returning the full result.
pub(super) fn parse(source: &str) -> ParseResult<'_> {
    crate::parse(source)
}

/// Parses `source` and asserts the parse was completely clean.
pub(super) fn parse_ok(source: &str) -> Document<'_> {
    let result = crate::parse(source);
    assert!(
        result.errors.is_empty(),
        "unexpected parse errors:\n{}",
        result.format_errors(),
    );
    result.document
}
