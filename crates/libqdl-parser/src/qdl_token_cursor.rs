use crate::token::QdlToken;
use crate::token::QdlTokenKind;
use crate::QdlLexer;
use crate::QdlSourceSpan;

/// Lookahead cursor over the pre-scanned token list.
///
/// [`QdlLexer::tokenize`] scans the whole input up front; this cursor is
/// the only interface the parser uses to read the result, providing
/// peek-current, peek-at-offset, and consume operations over the list.
///
/// # End-of-Input Behavior
///
/// Past end of input, every peek/advance returns the end-of-input token
/// indefinitely rather than erroring, so callers can always safely ask
/// "is the next token X" without a separate bounds check.
pub struct QdlTokenCursor<'src> {
    /// The token list; always ends with exactly one `Eof` token.
    tokens: Vec<QdlToken<'src>>,

    /// Index of the next unconsumed token. Never exceeds the `Eof`
    /// token's index.
    idx: usize,
}

impl<'src> QdlTokenCursor<'src> {
    /// Tokenizes `source` and positions the cursor at the first token.
    pub fn new(source: &'src str) -> Self {
        Self::from_tokens(QdlLexer::tokenize(source))
    }

    /// Wraps an existing token list.
    ///
    /// If the list does not end with an `Eof` token, one is appended so
    /// the end-of-input behavior holds.
    pub fn from_tokens(mut tokens: Vec<QdlToken<'src>>) -> Self {
        if tokens.last().is_none_or(|token| !token.is_eof()) {
            let end = tokens
                .last()
                .map(|token| token.span.end_exclusive)
                .unwrap_or_else(|| crate::SourcePosition::new(0, 0, 0));
            tokens.push(QdlToken::new(
                QdlTokenKind::Eof,
                QdlSourceSpan::new(end, end),
            ));
        }
        Self { tokens, idx: 0 }
    }

    /// Returns the next significant token without consuming it.
    pub fn peek(&self) -> &QdlToken<'src> {
        self.get(self.idx)
    }

    /// Bounded lookahead: returns the token `n` ahead of the next
    /// unconsumed token. `peek_nth(0)` is equivalent to `peek()`.
    ///
    /// No rule in the grammar needs more than one token of context, but
    /// the interface supports it.
    pub fn peek_nth(&self, n: usize) -> &QdlToken<'src> {
        self.get(self.idx + n)
    }

    /// Returns and consumes the next token. At end of input this keeps
    /// returning the end-of-input token.
    pub fn advance(&mut self) -> QdlToken<'src> {
        let token = self.get(self.idx).clone();
        if self.idx + 1 < self.tokens.len() {
            self.idx += 1;
        }
        token
    }

    /// Whether the next token is end-of-input.
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    fn get(&self, i: usize) -> &QdlToken<'src> {
        self.tokens
            .get(i)
            .unwrap_or_else(|| self.tokens.last().expect("token list always ends with Eof"))
    }
}
