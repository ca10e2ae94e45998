use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first byte of the source text
/// - `end_exclusive`: Position immediately after the last byte
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QdlSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl QdlSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// The number of bytes this span covers.
    pub fn len(&self) -> usize {
        self.end_exclusive.byte_offset() - self.start_inclusive.byte_offset()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extracts the slice of `source` this span covers.
    ///
    /// `source` must be the same buffer the span was produced from.
    pub fn source_slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()]
    }
}
