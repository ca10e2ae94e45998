//! Result type pairing a (possibly partial) document with its errors.

use crate::ast::Document;
use crate::QdlParseError;

/// The combined outcome of a parse.
///
/// Unlike `Result<T, E>`, a parse always produces both halves: a
/// document and the ordered list of errors recorded while producing it.
/// A malformed input degrades to a partial document plus errors rather
/// than no document at all, so later, unrelated definitions still parse.
///
/// The two halves are deliberately never separated: a caller that reads
/// the document while ignoring the error list risks silently consuming a
/// partially-correct tree. Use [`valid_document()`](Self::valid_document)
/// when only a clean parse is acceptable, or read
/// [`document`](Self::document) directly for best-effort access
/// (formatters, IDE features, linters).
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult<'src> {
    /// The parsed document. Best-effort (possibly partial, possibly
    /// empty) whenever `errors` is non-empty.
    pub document: Document<'src>,

    /// Errors recorded during tokenization and parsing, in source order.
    /// Empty if parsing was completely successful.
    pub errors: Vec<QdlParseError>,
}

impl<'src> ParseResult<'src> {
    /// Returns `true` if parsing was completely successful.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if any errors were recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the document only if parsing was completely successful.
    ///
    /// Use this when guaranteed-valid input is required, such as when
    /// feeding a schema to a validation or execution layer.
    pub fn valid_document(&self) -> Option<&Document<'src>> {
        if self.errors.is_empty() {
            Some(&self.document)
        } else {
            None
        }
    }

    /// Consuming version of [`valid_document()`](Self::valid_document).
    pub fn into_valid_document(self) -> Option<Document<'src>> {
        if self.errors.is_empty() {
            Some(self.document)
        } else {
            None
        }
    }

    /// Splits the result into its two halves.
    pub fn into_parts(self) -> (Document<'src>, Vec<QdlParseError>) {
        (self.document, self.errors)
    }

    /// Formats all errors as one string, one per line.
    pub fn format_errors(&self) -> String {
        self.errors
            .iter()
            .map(QdlParseError::format_oneline)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'src> From<ParseResult<'src>> for Result<Document<'src>, Vec<QdlParseError>> {
    /// Converts to a standard `Result`, treating a recovered document as
    /// an error.
    fn from(result: ParseResult<'src>) -> Self {
        if result.errors.is_empty() {
            Ok(result.document)
        } else {
            Err(result.errors)
        }
    }
}
