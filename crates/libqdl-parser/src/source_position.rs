/// Source position information recorded during tokenization.
///
/// This is a pure data struct with no mutation methods; the lexer is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: byte offset within the current line. QDL grammar tokens are
///   ASCII-range, so for token starts this matches what editors display
///   as "column"; only positions inside string or comment contents can
///   diverge on multi-byte characters.
/// - `byte_offset`: byte offset within the whole document
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Byte column within the current line (0-based)
    col: usize,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based byte column within the current line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
