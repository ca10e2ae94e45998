//! Lexer that produces [`QdlToken`]s from a `&str` input.
//!
//! Token values borrow directly from the source string, so lexing never
//! allocates for names, numbers, or strings (only `Error` tokens carry an
//! owned message).
//!
//! # Scanning Model
//!
//! Classification is longest-match over ordered alternatives. At each
//! position the classifiers are tried in a fixed priority order:
//! end-of-input, punctuator, float, integer, boolean, block string,
//! string, name. The order matters: `true`/`false` would otherwise be
//! swallowed by the name classifier, and float must be tried before
//! integer because both match a leading digit run. Like the boolean
//! classifier it imitates, the match is a plain prefix match, so
//! `trueish` lexes as a boolean followed by the name `ish`.
//!
//! A separate skip pass runs before each classification and repeats until
//! no insignificant token (whitespace, comment, newline, comma) matches,
//! so arbitrary interleavings of trivia between significant tokens are
//! fully consumed. Trivia is recorded and attached to the following
//! significant token rather than dropped.
//!
//! # Error Recovery
//!
//! Invalid input produces `Error` tokens rather than failing the lex:
//! unterminated strings, unsupported escapes, and raw newlines inside
//! single-line strings each yield an `Error` token covering the
//! best-effort consumed span. If nothing at all matches, exactly one
//! character is consumed as an `Error` token, guaranteeing forward
//! progress on arbitrary input.

use crate::token::QdlToken;
use crate::token::QdlTokenKind;
use crate::token::QdlTriviaToken;
use crate::token::QdlTriviaTokenKind;
use crate::token::QdlTriviaTokenVec;
use crate::QdlSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;

/// A lexer for QDL source text.
///
/// See the module documentation for the scanning model.
pub struct QdlLexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    pos: usize,

    /// Current 0-based line number.
    line: usize,

    /// Byte offset where the current line starts; columns are computed
    /// relative to this.
    line_start: usize,

    /// Whether the previous byte was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline: when we see `\r` we
    /// increment the line and set this flag; if the next byte is `\n` we
    /// skip the increment.
    last_byte_was_cr: bool,

    /// Trivia accumulated before the next significant token.
    pending_trivia: QdlTriviaTokenVec,
}

impl<'src> QdlLexer<'src> {
    /// Creates a new lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 0,
            line_start: 0,
            last_byte_was_cr: false,
            pending_trivia: smallvec![],
        }
    }

    /// Pre-scans the entire input into a token list terminated by exactly
    /// one end-of-input token.
    ///
    /// Scanning everything up front trades memory for safe, repeatable
    /// lookahead; documents are bounded in practice, so the token list is
    /// too.
    pub fn tokenize(source: &'src str) -> Vec<QdlToken<'src>> {
        let mut lexer = QdlLexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    ///
    /// Note the `'src` return lifetime: the slice borrows from the source
    /// buffer, not from the lexer.
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.pos - self.line_start, self.pos)
    }

    fn span_from(&self, start: SourcePosition) -> QdlSourceSpan {
        QdlSourceSpan::new(start, self.curr_position())
    }

    /// Consumes one byte and updates line tracking.
    ///
    /// `\n`, `\r`, and `\r\n` each count as one line break.
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        match byte {
            b'\n' => {
                if self.last_byte_was_cr {
                    // The \n of a \r\n pair; the line was already counted.
                    self.last_byte_was_cr = false;
                } else {
                    self.line += 1;
                }
                self.line_start = self.pos;
            }
            b'\r' => {
                self.line += 1;
                self.line_start = self.pos;
                self.last_byte_was_cr = true;
            }
            _ => {
                self.last_byte_was_cr = false;
            }
        }
        Some(byte)
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Scans the next significant token, attaching any trivia that
    /// precedes it.
    pub fn next_token(&mut self) -> QdlToken<'src> {
        self.skip_insignificant();

        let start = self.curr_position();

        let Some(byte) = self.peek_byte() else {
            let span = self.span_from(start);
            return self.make_token(QdlTokenKind::Eof, span);
        };

        let kind = match byte {
            b'!' => self.punctuator(QdlTokenKind::Bang),
            b'$' => self.punctuator(QdlTokenKind::Dollar),
            b'&' => self.punctuator(QdlTokenKind::Ampersand),
            b'(' => self.punctuator(QdlTokenKind::ParenOpen),
            b')' => self.punctuator(QdlTokenKind::ParenClose),
            b':' => self.punctuator(QdlTokenKind::Colon),
            b'=' => self.punctuator(QdlTokenKind::Equals),
            b'@' => self.punctuator(QdlTokenKind::At),
            b'[' => self.punctuator(QdlTokenKind::SquareBracketOpen),
            b']' => self.punctuator(QdlTokenKind::SquareBracketClose),
            b'{' => self.punctuator(QdlTokenKind::CurlyBraceOpen),
            b'|' => self.punctuator(QdlTokenKind::Pipe),
            b'}' => self.punctuator(QdlTokenKind::CurlyBraceClose),
            b'.' if self.rest().starts_with("...") => {
                self.advance_by(3);
                QdlTokenKind::Ellipsis
            }

            b'-' | b'0'..=b'9' => self.scan_number(),

            b'"' => self.scan_string_or_block_string(),

            _ if self.rest().starts_with("true") => {
                self.advance_by(4);
                QdlTokenKind::BooleanValue(true)
            }
            _ if self.rest().starts_with("false") => {
                self.advance_by(5);
                QdlTokenKind::BooleanValue(false)
            }

            b'_' | b'A'..=b'Z' | b'a'..=b'z' => self.scan_name(),

            _ => {
                // Nothing matched: consume one character so the scan
                // always makes forward progress, even on garbage input.
                let ch = self
                    .rest()
                    .chars()
                    .next()
                    .expect("peek_byte returned Some, so rest() is non-empty");
                self.advance_by(ch.len_utf8());
                QdlTokenKind::Error {
                    message: format!("unrecognized character `{ch}`"),
                }
            }
        };

        let span = self.span_from(start);
        self.make_token(kind, span)
    }

    fn punctuator(&mut self, kind: QdlTokenKind<'src>) -> QdlTokenKind<'src> {
        self.advance();
        kind
    }

    fn make_token(&mut self, kind: QdlTokenKind<'src>, span: QdlSourceSpan) -> QdlToken<'src> {
        QdlToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    // =========================================================================
    // Skip pass
    // =========================================================================

    /// Repeats until no insignificant token matches, recording each run
    /// as trivia.
    fn skip_insignificant(&mut self) {
        loop {
            let start = self.curr_position();
            match self.peek_byte() {
                Some(b' ' | b'\t') => {
                    while matches!(self.peek_byte(), Some(b' ' | b'\t')) {
                        self.advance();
                    }
                    self.push_trivia(QdlTriviaTokenKind::Whitespace, start);
                }
                Some(b'#') => {
                    // To end of line; a trailing \r stays inside the
                    // comment, the \n (if any) becomes newline trivia.
                    while let Some(byte) = self.peek_byte() {
                        if byte == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                    self.push_trivia(QdlTriviaTokenKind::Comment, start);
                }
                Some(b'\r') => {
                    self.advance();
                    if self.peek_byte() == Some(b'\n') {
                        self.advance();
                    }
                    self.push_trivia(QdlTriviaTokenKind::Newline, start);
                }
                Some(b'\n') => {
                    self.advance();
                    self.push_trivia(QdlTriviaTokenKind::Newline, start);
                }
                Some(b',') => {
                    self.advance();
                    self.push_trivia(QdlTriviaTokenKind::Comma, start);
                }
                _ => break,
            }
        }
    }

    fn push_trivia(&mut self, kind: QdlTriviaTokenKind, start: SourcePosition) {
        let span = self.span_from(start);
        self.pending_trivia.push(QdlTriviaToken { kind, span });
    }

    // =========================================================================
    // Classifiers
    // =========================================================================

    /// Scans an integer or float literal.
    ///
    /// Integer: optional `-`, then a single `0` or a non-zero digit
    /// followed by more digits (no leading zeros on multi-digit numbers,
    /// so `01` lexes as two integers).
    ///
    /// Float: the integer part followed by a fractional part (`.`
    /// digit*) and/or an exponent part (`e`/`E`, optional sign, digit*);
    /// at least one of the two must be present. The digit runs after `.`
    /// and the exponent may be empty at the lexical level; the numeric
    /// parse rejects them later.
    fn scan_number(&mut self) -> QdlTokenKind<'src> {
        let start = self.pos;

        if self.peek_byte() == Some(b'-') {
            self.advance();
        }

        match self.peek_byte() {
            Some(b'0') => {
                self.advance();
            }
            Some(b'1'..=b'9') => {
                while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                    self.advance();
                }
            }
            _ => {
                // A lone `-` is not a number (and matches nothing else).
                return QdlTokenKind::Error {
                    message: "unrecognized character `-`".to_string(),
                };
            }
        }

        let mut is_float = false;

        if self.peek_byte() == Some(b'.') {
            is_float = true;
            self.advance();
            while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            is_float = true;
            self.advance();
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.advance();
            }
            while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }

        let text = &self.source[start..self.pos];
        if is_float {
            QdlTokenKind::FloatValue(text)
        } else {
            QdlTokenKind::IntValue(text)
        }
    }

    fn scan_name(&mut self) -> QdlTokenKind<'src> {
        let start = self.pos;
        while matches!(
            self.peek_byte(),
            Some(b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
        ) {
            self.advance();
        }
        QdlTokenKind::Name(&self.source[start..self.pos])
    }

    /// Dispatches between the block string and string classifiers.
    ///
    /// Block string is tried first. If it fails (no closing `"""`), the
    /// plain string classifier runs on the same input per the
    /// ordered-alternative model, and sees the leading `""` as an empty
    /// string.
    fn scan_string_or_block_string(&mut self) -> QdlTokenKind<'src> {
        if self.rest().starts_with("\"\"\"")
            && let Some(kind) = self.scan_block_string()
        {
            return kind;
        }
        self.scan_string()
    }

    /// Scans a block string literal: `"""`-delimited, with `\"""` as the
    /// only recognized escape (it must not be treated as a terminator).
    ///
    /// Returns `None` without consuming anything if the block string is
    /// unterminated.
    fn scan_block_string(&mut self) -> Option<QdlTokenKind<'src>> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut i = 3;
        while i < bytes.len() {
            if bytes[i..].starts_with(b"\"\"\"") {
                let text = &rest[..i + 3];
                self.advance_by(i + 3);
                return Some(QdlTokenKind::BlockStringValue(text));
            }
            if bytes[i..].starts_with(b"\\\"\"\"") {
                i += 4;
            } else {
                i += 1;
            }
        }
        None
    }

    /// Scans a single-line string literal.
    ///
    /// Permitted escapes are `\" \\ \/ \b \f \n \r \t` and `\u` followed
    /// by exactly 4 hex digits. Any other escape, a raw newline, or a
    /// missing closing quote produces an `Error` token covering the
    /// best-effort consumed span.
    fn scan_string(&mut self) -> QdlTokenKind<'src> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        // Caller dispatched on the opening quote.
        let mut i = 1;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    let text = &rest[..=i];
                    self.advance_by(i + 1);
                    return QdlTokenKind::StringValue(text);
                }
                b'\n' => {
                    self.advance_by(i);
                    return QdlTokenKind::Error {
                        message: "raw newline in string literal".to_string(),
                    };
                }
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    self.advance_by(i);
                    return QdlTokenKind::Error {
                        message: "raw newline in string literal".to_string(),
                    };
                }
                b'\\' => match bytes.get(i + 1) {
                    Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                        i += 2;
                    }
                    Some(b'u') => {
                        if let Some(hex) = bytes.get(i + 2..i + 6)
                            && hex.iter().all(u8::is_ascii_hexdigit)
                        {
                            i += 6;
                        } else {
                            self.advance_by((i + 2).min(bytes.len()));
                            return QdlTokenKind::Error {
                                message: "invalid unicode escape in string literal"
                                    .to_string(),
                            };
                        }
                    }
                    Some(_) => {
                        // i + 1 is a char boundary (the byte at i is the
                        // ASCII backslash), so this slice cannot panic.
                        let ch = rest[i + 1..]
                            .chars()
                            .next()
                            .expect("escape byte exists, so a char follows the backslash");
                        self.advance_by(i + 1 + ch.len_utf8());
                        return QdlTokenKind::Error {
                            message: format!("unsupported escape sequence `\\{ch}`"),
                        };
                    }
                    None => {
                        self.advance_by(i + 1);
                        return QdlTokenKind::Error {
                            message: "unterminated string literal".to_string(),
                        };
                    }
                },
                _ => {
                    i += 1;
                }
            }
        }

        // End of input without a closing quote: the best-effort span is
        // everything that was consumed looking for one.
        self.advance_by(bytes.len());
        QdlTokenKind::Error {
            message: "unterminated string literal".to_string(),
        }
    }
}
