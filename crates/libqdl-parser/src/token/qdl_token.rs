use crate::token::QdlTokenKind;
use crate::token::QdlTriviaToken;
use crate::QdlSourceSpan;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type QdlTriviaTokenVec = SmallVec<[QdlTriviaToken; 2]>;

/// A significant QDL token with location (span) information and an
/// ordered list of any preceding trivia (whitespace, comments, newlines,
/// commas).
///
/// Trivia is attached to the *following* token, so the parser can simply
/// peek and advance without worrying about skipping trivia.
#[derive(Clone, Debug, PartialEq)]
pub struct QdlToken<'src> {
    /// The kind of token (including `Error` for lexer defects).
    pub kind: QdlTokenKind<'src>,

    /// Trivia that precedes this token.
    pub preceding_trivia: QdlTriviaTokenVec,

    /// The source location span of this token.
    pub span: QdlSourceSpan,
}

impl<'src> QdlToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: QdlTokenKind<'src>, span: QdlSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, QdlTokenKind::Eof)
    }
}
