//! A QDL parsing library for type-system definitions, executable
//! definitions, and documents that mix both together.
//!
//! Data flows one way: bytes → tokens → tree + errors. The
//! [`QdlLexer`] pre-scans the entire input into a token list, the
//! [`QdlTokenCursor`] provides bounded lookahead over it, and the
//! [`QdlParser`] walks the cursor with one production rule per grammar
//! nonterminal, accumulating errors instead of aborting, so a single
//! malformed definition still yields partial structure plus a complete
//! list of defects.

pub mod ast;
mod parse_result;
mod qdl_lexer;
mod qdl_parse_error;
mod qdl_parse_error_kind;
mod qdl_parser;
mod qdl_source_span;
mod qdl_token_cursor;
mod source_position;
pub mod token;

pub use parse_result::ParseResult;
pub use qdl_lexer::QdlLexer;
pub use qdl_parse_error::QdlParseError;
pub use qdl_parse_error_kind::QdlParseErrorKind;
pub use qdl_parser::QdlParser;
pub use qdl_source_span::QdlSourceSpan;
pub use qdl_token_cursor::QdlTokenCursor;
pub use source_position::SourcePosition;

/// Parses a QDL document.
///
/// Convenience wrapper around [`QdlParser`]; the result always carries
/// both the (possibly partial) document and the list of errors.
///
/// # Example
///
/// ```
/// let result = libqdl_parser::parse("scalar DateTime");
/// assert!(result.is_ok());
/// assert!(result.document.type_definitions.contains_key("DateTime"));
/// ```
pub fn parse(source: &str) -> ParseResult<'_> {
    QdlParser::new(source).parse()
}

#[cfg(test)]
mod tests;
