use crate::QdlSourceSpan;

/// The kind of an insignificant token.
///
/// These are recognized by the lexer's skip pass and never reach the
/// parser; the grammar ignores them wherever they appear between
/// significant tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QdlTriviaTokenKind {
    /// `#` to end of line.
    Comment,
    /// A run of spaces and tabs.
    Whitespace,
    /// `\n`, `\r`, or `\r\n`.
    Newline,
    /// `,`
    Comma,
}

/// An insignificant token, attached to the *following* significant token.
///
/// Keeping trivia around (rather than silently discarding it) means the
/// token sequence still covers every byte of the input: concatenating the
/// source slices of all trivia and token spans, in order, reconstructs
/// the original buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QdlTriviaToken {
    pub kind: QdlTriviaTokenKind,
    pub span: QdlSourceSpan,
}
