use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a significant QDL token.
///
/// Literal-bearing kinds store the raw source text, borrowed zero-copy
/// from the input buffer via the `'src` lifetime. Comments, whitespace,
/// newlines, and commas are not token kinds; they are recognized by the
/// lexer's skip pass and carried as
/// [`QdlTriviaToken`](crate::token::QdlTriviaToken)s.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum QdlTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A QDL name/identifier: `[_A-Za-z][_0-9A-Za-z]*`.
    Name(&'src str),

    /// Raw source text of an integer literal, including optional negative
    /// sign (e.g. `"-123"`, `"0"`).
    ///
    /// Use [`parse_int_value()`](Self::parse_int_value) to parse the raw
    /// text into an `i64`.
    IntValue(&'src str),

    /// Raw source text of a float literal, including optional negative
    /// sign (e.g. `"-1.23e-4"`, `"0.5"`).
    ///
    /// Use [`parse_float_value()`](Self::parse_float_value) to parse the
    /// raw text into an `f64`.
    FloatValue(&'src str),

    /// Raw source text of a single-line string literal, including quotes.
    ///
    /// Use [`string_content()`](Self::string_content) for the text between
    /// the delimiters.
    StringValue(&'src str),

    /// Raw source text of a block string literal, including the `"""`
    /// delimiters.
    BlockStringValue(&'src str),

    /// The `true` or `false` literal.
    BooleanValue(bool),

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. The associated `QdlToken` may carry trailing trivia.
    Eof,

    // =========================================================================
    // Lexer error (allows error recovery)
    // =========================================================================
    /// A lexer defect: unterminated string, unsupported escape, raw
    /// newline in a single-line string, or an unrecognized character.
    /// Carrying it as a token lets the parser continue and collect
    /// multiple errors in a single pass.
    Error {
        /// A human-readable error message.
        message: String,
    },
}

impl<'src> QdlTokenKind<'src> {
    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            QdlTokenKind::Ampersand => Some("&"),
            QdlTokenKind::At => Some("@"),
            QdlTokenKind::Bang => Some("!"),
            QdlTokenKind::Colon => Some(":"),
            QdlTokenKind::CurlyBraceClose => Some("}"),
            QdlTokenKind::CurlyBraceOpen => Some("{"),
            QdlTokenKind::Dollar => Some("$"),
            QdlTokenKind::Ellipsis => Some("..."),
            QdlTokenKind::Equals => Some("="),
            QdlTokenKind::ParenClose => Some(")"),
            QdlTokenKind::ParenOpen => Some("("),
            QdlTokenKind::Pipe => Some("|"),
            QdlTokenKind::SquareBracketClose => Some("]"),
            QdlTokenKind::SquareBracketOpen => Some("["),

            QdlTokenKind::Name(_)
            | QdlTokenKind::IntValue(_)
            | QdlTokenKind::FloatValue(_)
            | QdlTokenKind::StringValue(_)
            | QdlTokenKind::BlockStringValue(_)
            | QdlTokenKind::BooleanValue(_)
            | QdlTokenKind::Eof
            | QdlTokenKind::Error { .. } => None,
        }
    }

    /// Short display name for this token kind, used in error messages.
    ///
    /// These names are part of the observable error-reporting vocabulary.
    pub fn display_name(&self) -> &'static str {
        match self {
            QdlTokenKind::Name(_) => "name",
            QdlTokenKind::IntValue(_) => "integer",
            QdlTokenKind::FloatValue(_) => "float",
            QdlTokenKind::StringValue(_) => "string",
            QdlTokenKind::BlockStringValue(_) => "block string",
            QdlTokenKind::BooleanValue(_) => "boolean",
            QdlTokenKind::Eof => "end of input",
            QdlTokenKind::Error { .. } => "invalid token",
            _ => self
                .as_punctuator_str()
                .expect("every non-literal token kind is a punctuator"),
        }
    }

    /// The content of a string or block string literal with the
    /// delimiters stripped. Escape sequences are kept as written.
    ///
    /// Returns `None` for every other token kind.
    pub fn string_content(&self) -> Option<&'src str> {
        match self {
            QdlTokenKind::StringValue(raw) => Some(&raw[1..raw.len() - 1]),
            QdlTokenKind::BlockStringValue(raw) => Some(&raw[3..raw.len() - 3]),
            _ => None,
        }
    }

    /// Parse an `IntValue`'s raw text to `i64`.
    ///
    /// Returns `None` if this is not an `IntValue`, or `Some(Err(...))`
    /// if parsing fails (e.g. overflow).
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            QdlTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    ///
    /// Returns `None` if this is not a `FloatValue`, or `Some(Err(...))`
    /// if parsing fails (e.g. an exponent with no digits).
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            QdlTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }
}
