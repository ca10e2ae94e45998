/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic
/// decisions. The full human-readable message lives in
/// `QdlParseError::message`; the `#[error(...)]` messages here are
/// concise summaries.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QdlParseErrorKind {
    /// A specific keyword or punctuator was required but absent or
    /// mismatched.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("missing expected token: `{expected}`")]
    MissingExpectedToken {
        /// What was expected (e.g. `":"`, `"name"`).
        expected: String,
        /// Description of what was found instead.
        found: String,
    },

    /// A value, selection, or type could not be classified from the
    /// lookahead token.
    ///
    /// # Example
    /// ```text
    /// { field(limit: |) }
    ///                ^ expected a value, found `|`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// Description of what was found.
        found: String,
    },

    /// A top-level keyword was not recognized.
    ///
    /// Recovery is to skip the one token and retry classification, so a
    /// stray token between otherwise well-formed definitions costs
    /// exactly one error.
    #[error("unknown top-level definition: `{found}`")]
    UnknownTopLevelDefinition {
        /// The unrecognized keyword or token description.
        found: String,
    },

    /// `true`, `false`, or the empty name was used as an enum value
    /// name. The value's name is cleared rather than kept.
    #[error("invalid enum value name: `{name}`")]
    InvalidEnumValueName {
        /// The rejected name.
        name: String,
    },

    /// A directive location name outside both the executable and the
    /// type-system location sets. The location is dropped from the
    /// declaration's list rather than kept in an invalid state.
    #[error("invalid directive location: `{name}`")]
    InvalidDirectiveLocation {
        /// The unrecognized location name.
        name: String,
    },

    /// Numeric text matched the lexical pattern but failed the numeric
    /// parse. Defensive for integers in range, but reachable: `i64`
    /// overflow, or a float like `1e` whose exponent has no digits.
    #[error("malformed numeric literal: `{literal}`")]
    MalformedNumericLiteral {
        /// The raw literal text.
        literal: String,
    },

    /// Tokenizer-level defect: unterminated string, unsupported escape,
    /// raw newline in a single-line string, or an unrecognized
    /// character. The lexer's message is preserved in the parent
    /// `QdlParseError`.
    #[error("illegal lexeme")]
    IllegalLexeme,

    /// A top-level definition reuses a name already bound in its
    /// namespace. The later definition wins; this error marks the
    /// overwrite.
    #[error("duplicate definition: `{name}`")]
    DuplicateDefinition {
        /// The reused name; empty for the anonymous operation.
        name: String,
    },
}
