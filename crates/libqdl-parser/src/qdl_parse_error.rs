use crate::QdlParseErrorKind;
use crate::QdlSourceSpan;

/// A parse error with location information.
///
/// Errors are accumulated in source order by the lexer and parser; none
/// of them unwind a parse. See [`ParseResult`](crate::ParseResult) for
/// how they are surfaced to callers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct QdlParseError {
    /// Human-readable primary error message, e.g.
    /// "expected `:`, found `}`".
    message: String,

    /// The span where the error was detected: the offending token for
    /// "unexpected" errors, or where the missing token should have
    /// appeared.
    span: QdlSourceSpan,

    /// Categorized error kind, so tools can pattern-match without
    /// parsing messages.
    kind: QdlParseErrorKind,
}

impl QdlParseError {
    pub fn new(
        message: impl Into<String>,
        span: QdlSourceSpan,
        kind: QdlParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> QdlSourceSpan {
        self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &QdlParseErrorKind {
        &self.kind
    }

    /// Formats this error as a single-line summary:
    ///
    /// ```text
    /// 5:12: error: expected `:`, found `}`
    /// ```
    ///
    /// Line and column are displayed 1-based.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}: error: {}",
            self.span.start_inclusive.line() + 1,
            self.span.start_inclusive.col() + 1,
            self.message,
        )
    }
}
